//! Tests for config path resolution.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::ConfigError;
use super::paths::{ConfigEnv, default_config_path, default_inventory_dir, normalize_path};

mod default_path {
    use super::*;

    #[test]
    fn uses_xdg_config_home_when_set() {
        let env = ConfigEnv::from_vars(
            Some(OsString::from("/xdg")),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(
            default_config_path(&env).unwrap(),
            PathBuf::from("/xdg/openshift/installer.cfg.yml")
        );
    }

    #[test]
    fn falls_back_to_home_dot_config() {
        let env = ConfigEnv::from_vars(None, Some(PathBuf::from("/home/user")));

        assert_eq!(
            default_config_path(&env).unwrap(),
            PathBuf::from("/home/user/.config/openshift/installer.cfg.yml")
        );
    }

    #[test]
    fn empty_xdg_config_home_counts_as_unset() {
        let env = ConfigEnv::from_vars(Some(OsString::new()), Some(PathBuf::from("/home/user")));
        assert_eq!(env.config_home, None);
        assert_eq!(env.config_dir(), Some(PathBuf::from("/home/user/.config")));
    }

    #[test]
    fn trailing_slashes_are_normalized() {
        let env = ConfigEnv::from_vars(Some(OsString::from("/xdg//conf/")), None);

        assert_eq!(
            default_config_path(&env).unwrap(),
            PathBuf::from("/xdg/conf/openshift/installer.cfg.yml")
        );
    }

    #[test]
    fn no_base_directory_is_an_error() {
        let result = default_config_path(&ConfigEnv::default());
        assert!(matches!(result, Err(ConfigError::NoConfigHome)));
    }
}

mod inventory_dir {
    use super::*;

    #[test]
    fn sits_next_to_config_file() {
        assert_eq!(
            default_inventory_dir(Path::new("/etc/openshift/installer.cfg.yml")),
            PathBuf::from("/etc/openshift/.ansible")
        );
    }

    #[test]
    fn bare_file_name_uses_current_directory() {
        assert_eq!(
            default_inventory_dir(Path::new("installer.cfg.yml")),
            PathBuf::from(".ansible")
        );
    }
}

mod normalize {
    use super::*;

    #[test]
    fn drops_current_dir_and_redundant_separators() {
        assert_eq!(normalize_path(Path::new("/a/./b//c/")), PathBuf::from("/a/b/c"));
    }

    #[test]
    fn folds_parent_dir() {
        assert_eq!(normalize_path(Path::new("/a/b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize_path(Path::new("a/../../b")), PathBuf::from("../b"));
    }

    #[test]
    fn parent_of_root_is_root() {
        assert_eq!(normalize_path(Path::new("/../a")), PathBuf::from("/a"));
    }

    #[test]
    fn empty_result_is_current_dir() {
        assert_eq!(normalize_path(Path::new("a/..")), PathBuf::from("."));
        assert_eq!(normalize_path(Path::new("")), PathBuf::from("."));
    }
}
