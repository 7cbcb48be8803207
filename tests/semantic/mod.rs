mod tests_batch;
mod tests_userlist;
