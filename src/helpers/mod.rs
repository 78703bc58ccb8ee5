pub(crate) mod printer;
