use std::{
    env, fs,
    path::PathBuf,
    sync::{Mutex, MutexGuard, OnceLock},
};
use tempfile::TempDir;
use workforce_data::config::ConfigLoader;

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn env_guard() -> MutexGuard<'static, ()> {
    env_lock()
        .lock()
        .unwrap_or_else(|poison| poison.into_inner())
}

fn clear_env() {
    unsafe {
        env::remove_var("WORKFORCE_PROFILE");
        env::remove_var("WORKFORCE_LOG_LEVEL");
        env::remove_var("WORKFORCE_LOG_FORMAT");
        env::remove_var("WORKFORCE_DATABASE_URL");
        env::remove_var("WORKFORCE_DB_MAX_CONNECTIONS");
        env::remove_var("WORKFORCE_DB_ACQUIRE_TIMEOUT_MS");
    }
}

fn write_env_file(dir: &TempDir, name: &str, contents: &str) {
    let path = dir.path().join(name);
    fs::write(path, contents).unwrap();
}

#[test]
fn loads_defaults_when_no_env_present() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let cfg = loader.load().expect("config loads with defaults");

    assert_eq!(cfg.profile, "local");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.log_format, "json");
    assert_eq!(cfg.db_max_connections, 10);

    clear_env();
}

#[test]
fn layered_env_files_apply_in_order() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(
        &temp_dir,
        ".env",
        "WORKFORCE_DATABASE_URL=postgresql://base/db\n",
    );
    write_env_file(
        &temp_dir,
        ".env.test",
        "WORKFORCE_DATABASE_URL=postgresql://profile/db\n",
    );
    write_env_file(
        &temp_dir,
        ".env.test.local",
        "WORKFORCE_DATABASE_URL=postgresql://profile-local/db\n",
    );

    // Select the profile via .env.local before profile-specific files load.
    write_env_file(
        &temp_dir,
        ".env.local",
        "WORKFORCE_PROFILE=test\nWORKFORCE_DATABASE_URL=postgresql://local/db\n",
    );

    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let cfg = loader.load().expect("config loads with layered env files");

    assert_eq!(cfg.profile, "test");
    assert_eq!(cfg.database_url, "postgresql://profile-local/db");

    clear_env();
}

#[test]
fn os_environment_has_highest_precedence() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(
        &temp_dir,
        ".env",
        "WORKFORCE_DATABASE_URL=postgresql://file/db\nWORKFORCE_LOG_LEVEL=debug\n",
    );

    unsafe {
        env::set_var("WORKFORCE_DATABASE_URL", "postgresql://process/db");
    }

    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let cfg = loader.load().expect("config loads with env override");
    assert_eq!(cfg.database_url, "postgresql://process/db");
    assert_eq!(cfg.log_level, "debug");

    clear_env();
}

#[test]
fn zero_pool_size_returns_error() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    unsafe {
        env::set_var("WORKFORCE_DB_MAX_CONNECTIONS", "0");
    }

    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let err = loader.load().expect_err("zero pool size should fail");
    assert!(format!("{}", err).contains("pool size"));

    clear_env();
}
