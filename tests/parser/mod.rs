mod tests_documents;
mod tests_failures;
mod tests_lexical;
