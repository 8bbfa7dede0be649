use super::*;
use crate::backend::NullBackend;
use crate::config::TimeField;
use crate::library::{Album, Track, TrackId};
use crate::player::{ControllerOptions, PlaybackController};
use crate::queue::InsertMode;
use crate::transport::{ManualClock, TransportStatus};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

fn track(id: u64, secs: Option<u64>) -> Arc<Track> {
    Arc::new(Track {
        id: TrackId(id),
        name: format!("song {id}"),
        duration: secs.map(Duration::from_secs),
        artist: Some("Band".into()),
        album: Some(Album {
            name: "Record".into(),
            cover_path: Some(PathBuf::from("/music/Record/cover.jpg")),
        }),
        path: PathBuf::from(format!("/music/Record/{id}.mp3")),
    })
}

fn player_with(count: u64, start: usize) -> (ManualClock, PlaybackController) {
    let clock = ManualClock::new();
    let mut player = PlaybackController::new(
        Box::new(NullBackend),
        Box::new(clock.clone()),
        ControllerOptions::default(),
    );
    let tracks = (1..=count).map(|i| track(i, Some(100))).collect();
    player.play_now(tracks, start).unwrap();
    (clock, player)
}

#[test]
fn format_time_is_minutes_and_padded_seconds() {
    assert_eq!(format_time(Duration::ZERO), "0:00");
    assert_eq!(format_time(Duration::from_millis(59_999)), "0:59");
    assert_eq!(format_time(Duration::from_secs(60)), "1:00");
    assert_eq!(format_time(Duration::from_secs(3725)), "62:05");
}

#[test]
fn time_text_follows_configured_fields() {
    let fields = [TimeField::Elapsed, TimeField::Total, TimeField::Remaining];
    assert_eq!(
        time_text(Duration::from_secs(62), Duration::from_secs(225), &fields, " / ").as_deref(),
        Some("1:02 / 3:45 / -2:43")
    );
    assert_eq!(time_text(Duration::ZERO, Duration::ZERO, &[], " / "), None);
}

#[test]
fn compact_bar_reflects_controller() {
    let (clock, mut player) = player_with(2, 0);
    clock.advance(Duration::from_secs(25));
    player.tick();

    let bar = CompactBar::project(&player, None);
    assert_eq!(bar.title.as_deref(), Some("song 1"));
    assert_eq!(bar.artist.as_deref(), Some("Band"));
    assert_eq!(bar.album.as_deref(), Some("Record"));
    assert_eq!(bar.cover, Some(PathBuf::from("/music/Record/cover.jpg")));
    assert_eq!(bar.icon, TransportIcon::Pause);
    assert!((bar.progress - 0.25).abs() < 1e-9);
    assert_eq!(bar.elapsed, Duration::from_secs(25));

    player.play_pause();
    player.toggle_repeat();
    let bar = CompactBar::project(&player, None);
    assert_eq!(bar.icon, TransportIcon::Play);
    assert!(bar.repeat);
    assert!(!bar.shuffle);
}

#[test]
fn compact_bar_prefers_drag_preview() {
    let (_clock, player) = player_with(1, 0);
    let bar = CompactBar::project(&player, Some(Duration::from_secs(75)));
    assert_eq!(bar.elapsed, Duration::from_secs(75));
    assert!((bar.progress - 0.75).abs() < 1e-9);
}

#[test]
fn compact_bar_progress_is_zero_without_duration_and_capped_at_one() {
    let clock = ManualClock::new();
    let mut player = PlaybackController::new(
        Box::new(NullBackend),
        Box::new(clock.clone()),
        ControllerOptions::default(),
    );
    player.play_now(vec![track(1, None)], 0).unwrap();
    assert_eq!(CompactBar::project(&player, None).progress, 0.0);

    let (_clock, player) = player_with(1, 0);
    let bar = CompactBar::project(&player, Some(Duration::from_secs(500)));
    assert_eq!(bar.progress, 1.0);
}

#[test]
fn disabled_bar_has_no_track() {
    let player = PlaybackController::new(
        Box::new(NullBackend),
        Box::new(ManualClock::new()),
        ControllerOptions::default(),
    );
    let bar = CompactBar::project(&player, None);
    assert_eq!(bar.status, TransportStatus::Disabled);
    assert!(bar.title.is_none());
    assert_eq!(bar.icon, TransportIcon::Play);
    assert_eq!(bar.progress, 0.0);
}

#[test]
fn queue_panel_classifies_rows_around_cursor() {
    let (_clock, player) = player_with(4, 2);
    let panel = QueuePanel::project(&player);
    let classes: Vec<RowClass> = panel.rows.iter().map(|r| r.class).collect();
    assert_eq!(
        classes,
        vec![
            RowClass::Past,
            RowClass::Past,
            RowClass::Current,
            RowClass::Upcoming
        ]
    );
    assert_eq!(panel.rows[3].index, 3);
    assert_eq!(panel.rows[3].track.id, TrackId(4));
}

#[test]
fn queue_panel_entry_handles_survive_earlier_removal() {
    let (_clock, mut player) = player_with(4, 0);
    let panel = QueuePanel::project(&player);

    // Remove rows 1 and 3 from the same stale projection.
    player.remove_entry(panel.rows[1].entry);
    player.remove_entry(panel.rows[3].entry);

    let ids: Vec<TrackId> = QueuePanel::project(&player)
        .rows
        .iter()
        .map(|r| r.track.id)
        .collect();
    assert_eq!(ids, vec![TrackId(1), TrackId(3)]);
}

#[test]
fn fullscreen_shares_one_layer_when_few_remain() {
    let (_clock, player) = player_with(4, 1);
    let view = FullscreenView::project(&player, None);
    assert_eq!(view.remaining, 2);
    assert_eq!(view.upcoming.len(), 2);
    assert!(view.upcoming.iter().all(|c| c.layer == LayerIndex::Remaining));
    assert_eq!(view.upcoming[0].index, 2);
    assert_eq!(view.bar.title.as_deref(), Some("song 2"));
}

#[test]
fn fullscreen_stacks_at_most_five_cards() {
    let (_clock, player) = player_with(10, 0);
    let view = FullscreenView::project(&player, None);
    assert_eq!(view.remaining, 9);
    let layers: Vec<LayerIndex> = view.upcoming.iter().map(|c| c.layer).collect();
    assert_eq!(
        layers,
        vec![
            LayerIndex::Slice(4),
            LayerIndex::Slice(3),
            LayerIndex::Slice(2),
            LayerIndex::Slice(1),
            LayerIndex::Slice(0)
        ]
    );
    let ids: Vec<u64> = view.upcoming.iter().map(|c| c.track.id.0).collect();
    assert_eq!(ids, vec![2, 3, 4, 5, 6]);
}

#[test]
fn fullscreen_at_tail_and_on_empty_queue() {
    let (_clock, mut player) = player_with(2, 1);
    let view = FullscreenView::project(&player, None);
    assert_eq!(view.remaining, 0);
    assert!(view.upcoming.is_empty());

    for _ in 0..2 {
        let head = player.queue().entries()[0].id();
        player.remove_entry(head);
    }
    let view = FullscreenView::project(&player, None);
    assert_eq!(view.remaining, 0);
    assert!(view.bar.title.is_none());

    player.enqueue(vec![track(5, Some(10))], InsertMode::Append);
    assert_eq!(FullscreenView::project(&player, None).remaining, 0);
}

#[test]
fn fullscreen_cards_follow_the_cursor_after_removals_before_it() {
    let (_clock, mut player) = player_with(8, 3);
    let head = player.queue().entries()[0].id();
    player.remove_entry(head);
    assert_eq!(player.queue().position(), 2);

    let view = FullscreenView::project(&player, None);
    assert_eq!(view.bar.title.as_deref(), Some("song 4"));
    assert_eq!(view.remaining, 4);
    let cards: Vec<(usize, u64)> = view
        .upcoming
        .iter()
        .map(|c| (c.index, c.track.id.0))
        .collect();
    assert_eq!(cards, vec![(3, 5), (4, 6), (5, 7), (6, 8)]);
}
