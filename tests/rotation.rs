use {
    rotating_file_logger::{Error, Sink, SinkBuilder},
    std::{
        fs,
        io::Write,
        path::{Path, PathBuf},
    },
    tempfile::TempDir,
};

/// Length of `"YYYY/MM/DD HH:MM:SS"`.
const TIMESTAMP_LEN: usize = 19;

fn backup(base: &Path, index: usize) -> PathBuf {
    PathBuf::from(format!("{}.{index}", base.display()))
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

/// Write `bytes` as a single raw record.
fn write_raw(sink: &Sink, bytes: &[u8]) {
    let mut writer = sink;
    writer.write_all(bytes).unwrap();
}

/// Contents of the base file and every backup up to `max_index`, `None` for
/// missing files.
fn snapshot(base: &Path, max_index: usize) -> Vec<Option<String>> {
    let mut files = vec![fs::read_to_string(base).ok()];
    files.extend((1..=max_index).map(|i| fs::read_to_string(backup(base, i)).ok()));
    files
}

#[test]
fn creates_missing_file_and_appends_to_existing() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("app.log");

    let sink = Sink::new(&log, 0, 0).unwrap();
    assert!(log.exists());
    assert_eq!(sink.path(), Some(log.as_path()));
    drop(sink);

    fs::write(&log, "earlier run\n").unwrap();
    let sink = Sink::new(&log, 0, 0).unwrap();
    sink.emit(&[&"[I]", &"later run"]).unwrap();

    let contents = read(&log);
    assert!(contents.starts_with("earlier run\n"));
    assert!(contents.ends_with(" [I] later run\n"));
}

#[test]
fn open_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("missing").join("app.log");

    match Sink::new(&log, 100, 2) {
        Err(Error::Open { path, .. }) => assert_eq!(path, log),
        other => panic!("expected open error, got {other:?}"),
    }
}

#[test]
fn empty_path_writes_to_stderr_without_rotation() {
    let sink = Sink::new("", 10, 2).unwrap();
    assert_eq!(sink.path(), None);
    assert!(!sink.is_rotating());

    for i in 0..5 {
        sink.emit(&[&"[I]", &"stderr record", &i]).unwrap();
    }
    write_raw(&sink, b"raw stderr record\n");
    sink.close().unwrap();
}

#[test]
fn rollover_fires_before_the_record_that_reaches_the_threshold() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("app.log");
    let sink = Sink::new(&log, 100, 2).unwrap();

    // Each record is TIMESTAMP + " record-0N" + "\n" = 30 bytes.
    for n in 1..=3 {
        sink.emit(&[&format!("record-0{n}")]).unwrap();
    }
    assert_eq!(fs::metadata(&log).unwrap().len(), 90);
    assert!(!backup(&log, 1).exists());

    // 90 + 30 >= 100: the fourth record starts a fresh file.
    sink.emit(&[&"record-04"]).unwrap();

    let rotated = read(&backup(&log, 1));
    assert_eq!(rotated.len(), 90);
    assert_eq!(rotated.lines().count(), 3);
    assert!(rotated.contains("record-03"));

    let current = read(&log);
    assert_eq!(current.len(), 30);
    assert!(current.ends_with(" record-04\n"));
}

#[test]
fn size_check_counts_timestamp_and_tag() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("app.log");
    let sink = Sink::new(&log, 85, 2).unwrap();

    let record_len = TIMESTAMP_LEN + " [I] abcde".len() + 1;
    assert_eq!(record_len, 30);

    sink.emit(&[&"[I]", &"abcde"]).unwrap();
    sink.emit(&[&"[I]", &"abcde"]).unwrap();
    assert!(!backup(&log, 1).exists());

    // 60 + 30 >= 85 only when the whole line is counted; the fields alone
    // ("[I] abcde", 9 bytes) would not trigger a rollover here.
    sink.emit(&[&"[I]", &"abcde"]).unwrap();
    assert_eq!(read(&backup(&log, 1)).len(), 60);
    assert_eq!(read(&log).len(), 30);
}

#[test]
fn preexisting_content_counts_towards_the_threshold() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("app.log");
    fs::write(&log, "x".repeat(80)).unwrap();

    let sink = Sink::new(&log, 100, 3).unwrap();
    sink.emit(&[&"record-01"]).unwrap();

    assert_eq!(read(&backup(&log, 1)), "x".repeat(80));
    assert!(read(&log).ends_with(" record-01\n"));
}

#[test]
fn backup_set_grows_to_backup_count_and_stops() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("app.log");
    let backup_count = 3;
    let sink = Sink::new(&log, 50, backup_count as i64).unwrap();

    // 30-byte records with a 50-byte threshold: every record after the first
    // triggers exactly one rollover.
    for n in 1..=10usize {
        sink.emit(&[&format!("record-{n:02}")]).unwrap();
        let rotations = n - 1;
        for index in 1..=backup_count + 2 {
            assert_eq!(
                backup(&log, index).exists(),
                index <= rotations.min(backup_count),
                "after rotation {rotations}, {}.{index}",
                log.display()
            );
        }
    }
}

#[test]
fn rotation_is_a_pure_shift() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("app.log");
    let backup_count = 3;
    let sink = Sink::new(&log, 100, backup_count as i64).unwrap();

    write_raw(&sink, "A".repeat(60).as_bytes());
    for fill in ["B", "C", "D", "E", "F"] {
        let before = snapshot(&log, backup_count);
        write_raw(&sink, fill.repeat(60).as_bytes());
        let after = snapshot(&log, backup_count + 1);

        assert_eq!(after[0].as_deref(), Some(fill.repeat(60).as_str()));
        for index in 0..backup_count {
            assert_eq!(after[index + 1], before[index], "slot {index} should move to {}", index + 1);
        }
        assert_eq!(after[backup_count + 1], None);
        if let Some(evicted) = &before[backup_count] {
            assert!(!after.contains(&Some(evicted.clone())), "evicted content must be gone");
        }
    }

    assert_eq!(read(&log), "F".repeat(60));
    assert_eq!(read(&backup(&log, 1)), "E".repeat(60));
    assert_eq!(read(&backup(&log, 2)), "D".repeat(60));
    assert_eq!(read(&backup(&log, 3)), "C".repeat(60));
}

#[test]
fn end_to_end_three_rollovers_with_two_backups() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("app.log");
    let sink = Sink::new(&log, 100, 2).unwrap();

    write_raw(&sink, &[b'a'; 95]);
    write_raw(&sink, &[b'b'; 10]);
    assert_eq!(fs::read(backup(&log, 1)).unwrap(), vec![b'a'; 95]);
    assert_eq!(fs::read(&log).unwrap(), vec![b'b'; 10]);
    assert!(!backup(&log, 2).exists());

    write_raw(&sink, &[b'c'; 90]);
    assert_eq!(fs::read(backup(&log, 2)).unwrap(), vec![b'a'; 95]);
    assert_eq!(fs::read(backup(&log, 1)).unwrap(), vec![b'b'; 10]);
    assert_eq!(fs::read(&log).unwrap(), vec![b'c'; 90]);

    write_raw(&sink, &[b'd'; 10]);
    assert_eq!(fs::read(backup(&log, 2)).unwrap(), vec![b'b'; 10]);
    assert_eq!(fs::read(backup(&log, 1)).unwrap(), vec![b'c'; 90]);
    assert_eq!(fs::read(&log).unwrap(), vec![b'd'; 10]);
    assert!(!backup(&log, 3).exists());
}

#[test]
fn disabled_rotation_grows_without_bound() {
    for (max_bytes, backup_count) in [(10, 0), (10, -1), (0, 3), (-5, 3)] {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("app.log");
        let sink = Sink::new(&log, max_bytes, backup_count).unwrap();
        assert!(!sink.is_rotating());

        for n in 0..50 {
            sink.emit(&[&"[D]", &"record", &n]).unwrap();
        }

        assert_eq!(read(&log).lines().count(), 50);
        assert!(!backup(&log, 1).exists(), "max_bytes={max_bytes} backup_count={backup_count}");
    }
}

#[test]
fn rollover_prunes_backups_above_backup_count() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("app.log");
    for stale in ["app.log.3", "app.log.7", "app.log.bak", "app.log.1x", "other.log.9"] {
        fs::write(dir.path().join(stale), stale).unwrap();
    }

    let sink = Sink::new(&log, 50, 2).unwrap();
    sink.emit(&[&"record-01"]).unwrap();
    assert!(dir.path().join("app.log.7").exists(), "nothing is pruned before a rollover");
    sink.emit(&[&"record-02"]).unwrap();

    assert!(backup(&log, 1).exists());
    assert!(!dir.path().join("app.log.3").exists());
    assert!(!dir.path().join("app.log.7").exists());
    assert!(dir.path().join("app.log.bak").exists());
    assert!(dir.path().join("app.log.1x").exists());
    assert!(dir.path().join("other.log.9").exists());
}

#[cfg(unix)]
#[test]
fn file_mode_applies_to_current_and_rotated_files() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let log = dir.path().join("app.log");
    let sink = SinkBuilder::new(&log)
        .max_bytes(50)
        .backup_count(2)
        .file_mode(0o640)
        .build()
        .unwrap();
    sink.emit(&[&"record-01"]).unwrap();
    sink.emit(&[&"record-02"]).unwrap();

    let mode = |path: &Path| fs::metadata(path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode(&log), 0o640);
    assert_eq!(mode(&backup(&log, 1)), 0o640);
}

#[cfg(target_os = "linux")]
#[test]
fn write_failure_is_returned() {
    let sink = Sink::new("/dev/full", 0, 0).unwrap();
    assert!(matches!(sink.emit(&[&"[E]", &"no space"]), Err(Error::Write(_))));
}

#[test]
fn raw_writes_share_the_rollover_path() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("app.log");
    let mut sink = Sink::new(&log, 20, 1).unwrap();

    sink.write_all(b"first line\n").unwrap();
    sink.write_all(b"second line\n").unwrap();
    sink.flush().unwrap();

    assert_eq!(read(&backup(&log, 1)), "first line\n");
    assert_eq!(read(&log), "second line\n");
}

#[test]
fn failed_shift_does_not_block_logging() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("app.log");
    // A non-empty directory in the oldest slot can be neither removed nor
    // renamed over.
    fs::create_dir(backup(&log, 2)).unwrap();
    fs::write(backup(&log, 2).join("keep"), "keep").unwrap();

    let sink = Sink::new(&log, 50, 2).unwrap();
    for n in 0..5 {
        sink.emit(&[&format!("record-0{n}")]).unwrap();
    }

    assert!(read(&log).ends_with(" record-04\n"));
    assert!(read(&backup(&log, 1)).ends_with(" record-03\n"));
    assert!(backup(&log, 2).is_dir());
}

#[cfg(unix)]
#[test]
fn failed_reopen_is_reported_until_the_file_can_be_opened_again() {
    let dir = TempDir::new().unwrap();
    let logs = dir.path().join("logs");
    fs::create_dir(&logs).unwrap();
    let log = logs.join("app.log");

    let sink = Sink::new(&log, 50, 2).unwrap();
    sink.emit(&[&"record-00"]).unwrap();

    // The open handle outlives its directory; the rollover's reopen cannot.
    fs::remove_dir_all(&logs).unwrap();
    for n in 1..=3 {
        match sink.emit(&[&format!("record-0{n}")]) {
            Err(Error::Open { path, .. }) => assert_eq!(path, log),
            other => panic!("expected open error, got {other:?}"),
        }
    }

    fs::create_dir(&logs).unwrap();
    sink.emit(&[&"record-04"]).unwrap();
    let contents = read(&log);
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.ends_with(" record-04\n"));
}
