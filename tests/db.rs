use readymix_erp::ADMIN_ROLE;
use readymix_erp::repository::OrganizationReader;

mod common;

#[test]
fn test_creates_and_removes_db_files() {
    let dir;
    {
        let test_db = common::TestDb::new("test_connection.db");
        let conn = test_db.pool().get();
        assert!(conn.is_ok());
        dir = test_db.path().to_path_buf();
        assert!(dir.join("test_connection.db").exists());
    }

    assert!(!dir.exists());
}

#[test]
fn migrations_seed_roles_and_departments() {
    let test_db = common::TestDb::new("test_seed.db");
    let repo = test_db.repo();

    let roles = repo.list_roles().unwrap();
    assert!(roles.iter().any(|role| role.name == ADMIN_ROLE));
    assert!(roles.iter().any(|role| role.name == "Driver"));

    let departments = repo.list_departments().unwrap();
    assert_eq!(departments.len(), 6);

    let locations = repo.list_locations().unwrap();
    assert_eq!(locations[0].name, "Main Plant");
}
