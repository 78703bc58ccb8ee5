use crate::algorithm::builder::GmabBuilderError;

// Helper function for probability validation
pub(super) fn validate_probability(value: f64, name: &str) -> Result<(), GmabBuilderError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(GmabBuilderError::ValidationError(format!(
            "{name} must be between 0 and 1, got {value}"
        )));
    }
    Ok(())
}

// The mutation span is relative to each dimension's range, so zero would
// disable mutation entirely and anything above one overshoots the range.
pub(super) fn validate_mutation_span(value: f64) -> Result<(), GmabBuilderError> {
    if !(value > 0.0 && value <= 1.0) {
        return Err(GmabBuilderError::ValidationError(format!(
            "mutation_span must be in (0, 1], got {value}"
        )));
    }
    Ok(())
}

pub(super) fn validate_population_size(value: usize) -> Result<(), GmabBuilderError> {
    if value < 2 {
        return Err(GmabBuilderError::ValidationError(format!(
            "population_size must be at least 2, got {value}"
        )));
    }
    Ok(())
}
