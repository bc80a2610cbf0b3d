mod test_auth_boundary;
mod test_health;
