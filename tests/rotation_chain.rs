//! Integration tests for day-based rotation and the backup chain.
#![allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]

mod common;

use common::{IntegrationTestContext, TestContextBuilder};
use daylog::{LogLevel, Logger, log_info};

/// Advance one day, write `text`, and wait until it is on disk.
fn next_day(ctx: &IntegrationTestContext, log: &Logger, text: &str) {
    ctx.clock.advance_days(1);
    log_info!(log, "{text}");
    log.flush_and_wait().unwrap();
}

#[test]
fn day_change_moves_current_log_verbatim_to_first_backup() {
    let ctx = IntegrationTestContext::new();
    let log = ctx.logger(LogLevel::Info, 1);

    log_info!(log, "monday a");
    log_info!(log, "monday b");
    log.flush_and_wait().unwrap();
    let monday = std::fs::read(ctx.paths().current()).unwrap();

    next_day(&ctx, &log, "tuesday");

    assert_eq!(std::fs::read(ctx.paths().backup(1)).unwrap(), monday);
    let lines = ctx.current_lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("tuesday"));
}

#[test]
fn rotation_happens_without_flush_between_days() {
    let ctx = IntegrationTestContext::new();
    let log = ctx.logger(LogLevel::Info, 2);

    log_info!(log, "day 0");
    ctx.clock.advance_days(1);
    log_info!(log, "day 1");
    log.flush_and_wait().unwrap();

    assert!(ctx.backup_lines(1)[0].ends_with("day 0"));
    assert!(ctx.current_lines()[0].ends_with("day 1"));
}

#[test]
fn chain_never_exceeds_configured_depth() {
    for depth in 1..=5 {
        let ctx = IntegrationTestContext::new();
        let log = ctx.logger(LogLevel::Info, depth);

        log_info!(log, "day 0");
        log.flush_and_wait().unwrap();
        for day in 1..=7 {
            next_day(&ctx, &log, &format!("day {day}"));
        }

        let backups: Vec<usize> = ctx
            .paths()
            .existing_backups()
            .into_iter()
            .map(|(rank, _)| rank)
            .collect();
        assert_eq!(backups, (1..=depth).collect::<Vec<_>>(), "depth {depth}");
        for rank in 1..=depth {
            let expected = format!("day {}", 7 - rank);
            assert!(
                ctx.backup_lines(rank)[0].ends_with(&expected),
                "depth {depth} rank {rank}"
            );
        }
    }
}

#[test]
fn fewer_rotations_than_depth_keep_every_generation() {
    let ctx = IntegrationTestContext::new();
    let log = ctx.logger(LogLevel::Info, 5);

    log_info!(log, "day 0");
    log.flush_and_wait().unwrap();
    next_day(&ctx, &log, "day 1");
    next_day(&ctx, &log, "day 2");

    assert_eq!(ctx.paths().existing_backups().len(), 2);
    assert!(ctx.backup_lines(1)[0].ends_with("day 1"));
    assert!(ctx.backup_lines(2)[0].ends_with("day 0"));
}

#[test]
fn lowering_depth_takes_effect_at_next_rotation() {
    let ctx = IntegrationTestContext::new();
    let log = ctx.logger(LogLevel::Info, 4);

    log_info!(log, "day 0");
    log.flush_and_wait().unwrap();
    for day in 1..=4 {
        next_day(&ctx, &log, &format!("day {day}"));
    }
    assert_eq!(ctx.paths().existing_backups().len(), 4);

    assert_eq!(log.set_backup_depth(2), 2);
    log.flush_and_wait().unwrap();
    assert_eq!(
        ctx.paths().existing_backups().len(),
        4,
        "existing backups survive until the next rotation"
    );

    next_day(&ctx, &log, "day 5");
    let ranks: Vec<usize> = ctx
        .paths()
        .existing_backups()
        .into_iter()
        .map(|(rank, _)| rank)
        .collect();
    assert_eq!(ranks, [1, 2]);
    assert!(ctx.backup_lines(1)[0].ends_with("day 4"));
    assert!(ctx.backup_lines(2)[0].ends_with("day 3"));
}

#[test]
fn raising_depth_keeps_older_generations_from_then_on() {
    let ctx = IntegrationTestContext::new();
    let log = ctx.logger(LogLevel::Info, 1);

    log_info!(log, "day 0");
    log.flush_and_wait().unwrap();
    next_day(&ctx, &log, "day 1");
    log.set_backup_depth(3);
    next_day(&ctx, &log, "day 2");
    next_day(&ctx, &log, "day 3");

    assert_eq!(ctx.paths().existing_backups().len(), 3);
    assert!(ctx.backup_lines(3)[0].ends_with("day 0"));
}

#[test]
fn out_of_range_depths_are_clamped() {
    let ctx = IntegrationTestContext::new();
    let log = ctx.logger(LogLevel::Info, 0);
    assert_eq!(log.backup_depth(), 1);
    assert_eq!(log.set_backup_depth(9), 5);
}

#[test]
fn rotation_replaces_stale_backups_from_earlier_runs() {
    let ctx = TestContextBuilder::new()
        .with_file("PreviousLog1.txt", "ancient\n")
        .build();
    let log = ctx.logger(LogLevel::Info, 1);

    log_info!(log, "today");
    log.flush_and_wait().unwrap();
    next_day(&ctx, &log, "tomorrow");

    let backup = ctx.backup_lines(1);
    assert_eq!(backup.len(), 1);
    assert!(backup[0].ends_with("today"));
}

#[test]
fn suppressed_messages_never_rotate() {
    let ctx = IntegrationTestContext::new();
    let log = ctx.logger(LogLevel::Error, 1);

    log.error(&daylog::call_site!(), format_args!("kept"));
    log.flush_and_wait().unwrap();
    ctx.clock.advance_days(1);
    log_info!(log, "dropped");
    log.flush_and_wait().unwrap();

    assert!(!ctx.paths().backup(1).exists());
    assert_eq!(ctx.current_lines().len(), 1);
}

#[test]
fn failed_backup_moves_are_skipped_and_writing_continues() {
    let ctx = IntegrationTestContext::new();
    let blocker = ctx.paths().backup(1);
    std::fs::create_dir(&blocker).unwrap();
    std::fs::write(blocker.join("keep.txt"), "occupied").unwrap();
    let log = ctx.logger(LogLevel::Info, 1);

    log_info!(log, "day 0");
    log.flush_and_wait().unwrap();
    next_day(&ctx, &log, "day 1");

    let lines = ctx.current_lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("] day 0"));
    assert!(lines[1].ends_with("] day 1"));
    assert!(blocker.join("keep.txt").exists());
}

#[test]
fn unopenable_log_drops_line_and_recovers() {
    let ctx = IntegrationTestContext::new();
    let dir = ctx.root_path().join("logs");
    std::fs::write(&dir, "not a directory").unwrap();
    let log = Logger::builder(&dir)
        .console(false)
        .clock(ctx.clock.clone())
        .build()
        .unwrap();

    log_info!(log, "dropped");
    log.flush_and_wait().unwrap();
    assert!(dir.is_file());

    std::fs::remove_file(&dir).unwrap();
    log_info!(log, "kept");
    log.flush_and_wait().unwrap();

    let content = std::fs::read_to_string(dir.join("CurrentLog.txt")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("] kept"));
}
