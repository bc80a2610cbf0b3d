mod test_notemon_db;
