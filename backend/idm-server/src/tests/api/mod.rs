mod envelope;
mod error;
mod list_query;
mod validation;
