//! Tests for log level functionality.

use tintlog::Level;

#[test]
fn level_ordering() {
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Success);
    assert!(Level::Success < Level::Warn);
    assert!(Level::Warn < Level::Error);
}

#[test]
fn level_ranks_contiguous_from_zero() {
    for (rank, level) in Level::all().into_iter().enumerate() {
        assert_eq!(level as usize, rank);
    }
    assert_eq!(Level::all().len(), Level::COUNT);
}

#[test]
fn level_display() {
    assert_eq!(Level::Debug.to_string(), "debug");
    assert_eq!(Level::Info.to_string(), "info");
    assert_eq!(Level::Success.to_string(), "success");
    assert_eq!(Level::Warn.to_string(), "warn");
    assert_eq!(Level::Error.to_string(), "error");
}

#[test]
fn level_labels_uppercase() {
    assert_eq!(Level::Debug.label(), "DEBUG");
    assert_eq!(Level::Info.label(), "INFO");
    assert_eq!(Level::Success.label(), "SUCCESS");
    assert_eq!(Level::Warn.label(), "WARN");
    assert_eq!(Level::Error.label(), "ERROR");
}

#[test]
fn level_from_str() {
    assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("INFO".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("Success".parse::<Level>().unwrap(), Level::Success);
    assert_eq!("ok".parse::<Level>().unwrap(), Level::Success);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
}

#[test]
fn level_from_str_invalid() {
    assert!("invalid".parse::<Level>().is_err());
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Info);
}
