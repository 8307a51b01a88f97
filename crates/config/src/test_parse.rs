#[cfg(test)]
mod tests {
    use std::{
        ffi::OsString,
        fs,
        path::{Path, PathBuf},
        process,
    };

    use crate::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let mut p = env::temp_dir();
        p.push(format!("moveit-config-{}-{name}.ron", process::id()));
        fs::write(&p, contents).unwrap();
        p
    }

    #[test]
    fn empty_sources_mean_defaults() {
        assert_eq!(load_from_str("").unwrap(), Config::default());
        assert_eq!(load_from_str("  \n").unwrap(), Config::default());
        assert_eq!(load_from_str("()").unwrap(), Config::default());
        let d = Config::default();
        assert_eq!(d.split, 60);
        assert_eq!(d.focus_margin, 35);
        assert_eq!(d.strut_policy(), StrutPolicy::Intersecting);
    }

    #[test]
    fn all_fields_parse() {
        let cfg = load_from_str(
            r#"(
                split: 50,
                focus_margin: 20,
                struts: desktop_wide,
                unreadable_windows: abort,
            )"#,
        )
        .unwrap();
        assert_eq!(cfg.split, 50);
        assert_eq!(cfg.strut_policy(), StrutPolicy::DesktopWide);
        let opts = cfg.focus_options(None);
        assert_eq!(opts.margin, 20);
        assert_eq!(opts.scan, ScanPolicy::Abort);
        assert_eq!(cfg.focus_options(Some(5)).margin, 5);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = load_from_str("(splt: 50)").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }), "{err:?}");
    }

    #[test]
    fn out_of_range_split_fails_validation() {
        let err = load_from_str("(split: 120)").unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
        assert!(err.pretty().contains("0..=100"));
    }

    #[test]
    fn file_errors_carry_the_path() {
        let p = temp_file("bad", "(split: 101)");
        let err = load_from_path(&p).unwrap_err();
        assert_eq!(err.path(), Some(p.as_path()));
        assert!(err.pretty().starts_with("Config validation error at "));
        fs::remove_file(&p).unwrap();

        let missing = Path::new("/nonexistent/moveit/config.ron");
        let err = load(Some(missing)).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert_eq!(err.path(), Some(missing));
    }

    #[test]
    fn explicit_file_loads() {
        let p = temp_file("ok", "(split: 40)");
        assert_eq!(load(Some(&p)).unwrap().split, 40);
        fs::remove_file(&p).unwrap();
    }

    #[test]
    fn config_path_prefers_xdg() {
        let xdg = config_path_from(Some(OsString::from("/x")), Some(OsString::from("/home/u")));
        assert_eq!(xdg, PathBuf::from("/x/moveit/config.ron"));
        let home = config_path_from(Some(OsString::new()), Some(OsString::from("/home/u")));
        assert_eq!(home, PathBuf::from("/home/u/.config/moveit/config.ron"));
    }
}
