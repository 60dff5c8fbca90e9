//! Behavioral tests for the playback engine over a headless backend.

use entrain_dsp::engine::Visibility;
use entrain_dsp::io::backend_null::NullBackend;
use entrain_dsp::io::AudioBackend;
use entrain_dsp::io::NoopWakeLock;
use entrain_dsp::tuning::Band;
use entrain_dsp::{EngineConfig, PlaybackEngine};

const SAMPLE_RATE: f32 = 48_000.0;

fn engine() -> PlaybackEngine<NullBackend> {
    PlaybackEngine::new(
        NullBackend::new(SAMPLE_RATE),
        Box::new(NoopWakeLock),
        EngineConfig::default(),
    )
}

#[test]
fn start_then_stop_returns_to_idle_with_no_graph() {
    let mut engine = engine();

    engine.start().expect("start from idle");
    assert!(engine.is_running());
    assert!(engine.backend().is_live());

    engine.stop();
    assert!(!engine.is_running());
    assert!(!engine.backend().is_live(), "graph must be torn down");

    // Second stop is a no-op, not an error.
    engine.stop();
    assert!(!engine.is_running());
}

#[test]
fn double_start_is_rejected_and_leaves_the_session_untouched() {
    let mut engine = engine();
    engine.start().unwrap();
    engine.backend_mut().advance_seconds(1.0);

    let err = engine.start().expect_err("second start must fail");
    assert!(matches!(
        err,
        entrain_dsp::engine::EngineError::AlreadyRunning
    ));
    assert!(engine.is_running());
    assert!(engine.backend().is_live());
    // The first session's clock origin survived: elapsed keeps counting.
    engine.backend_mut().advance_seconds(1.0);
    assert_eq!(engine.elapsed_display(), "00:02");
}

#[test]
fn retune_while_running_updates_frequencies_without_stopping() {
    let mut engine = engine();
    engine.start().unwrap();

    engine.set_carrier(300.0);
    engine.set_beat(8.0);

    assert!(engine.is_running());
    let (left, right) = engine.channel_frequencies();
    assert_eq!(left, 296.0);
    assert_eq!(right, 304.0);

    // The live voice received the same targets.
    let voice = engine.backend().voice_params().expect("live voice");
    assert_eq!(voice.left_hz, 296.0);
    assert_eq!(voice.right_hz, 304.0);
}

#[test]
fn setters_while_idle_update_parameters_silently() {
    let mut engine = engine();
    engine.set_carrier(250.0);
    engine.set_volume(30.0);

    assert!(!engine.is_running());
    assert_eq!(engine.params().carrier_hz(), 250.0);
    assert_eq!(engine.params().volume_percent(), 30.0);
    assert!(engine.backend().voice_params().is_none());
}

#[test]
fn alpha_band_sets_beat_and_resets_carrier() {
    let mut engine = engine();
    engine.set_carrier(873.0);

    engine.set_band(Band::Alpha);

    assert_eq!(engine.params().beat_hz(), 10.0);
    assert_eq!(engine.params().carrier_hz(), 400.0);
}

#[test]
fn presets_apply_and_unknown_names_change_nothing() {
    let mut engine = engine();

    engine.set_preset("meditation").expect("known preset");
    assert_eq!(engine.params().carrier_hz(), 400.0);
    assert_eq!(engine.params().beat_hz(), 6.0);
    assert_eq!(engine.params().volume_percent(), 40.0);

    let before = engine.params();
    assert!(engine.set_preset("xyz").is_err());
    assert_eq!(engine.params(), before);
}

#[test]
fn elapsed_tracks_the_engine_clock_and_resets_on_stop() {
    let mut engine = engine();
    engine.start().unwrap();

    engine.backend_mut().advance_seconds(3.0);
    assert_eq!(engine.elapsed_display(), "00:03");

    engine.stop();
    assert_eq!(engine.elapsed_display(), "00:00");
}

#[test]
fn pause_freezes_the_readout_and_a_restart_counts_fresh() {
    let mut engine = engine();
    engine.start().unwrap();
    engine.backend_mut().advance_seconds(5.0);

    engine.pause();
    assert!(!engine.is_running());
    assert_eq!(engine.elapsed_display(), "00:05");

    // Parameters survive a pause; the next start rebuilds from them.
    engine.start().unwrap();
    engine.backend_mut().advance_seconds(2.0);
    assert_eq!(engine.elapsed_display(), "00:02");
}

#[test]
fn successful_resume_keeps_parameters_and_running_state() {
    let mut engine = engine();
    engine.set_preset("focus").unwrap();
    engine.start().unwrap();

    engine.backend_mut().set_suspended(true);
    engine.handle_suspension();

    assert!(engine.is_running());
    assert_eq!(engine.params().beat_hz(), 15.0);
    let voice = engine.backend().voice_params().expect("nodes intact");
    assert_eq!(voice.gain, 0.5);
}

#[test]
fn failed_resume_transitions_to_idle() {
    let mut engine = engine();
    engine.start().unwrap();

    engine.backend_mut().set_suspended(true);
    engine.backend_mut().fail_next_resume(true);
    engine.handle_suspension();

    assert!(!engine.is_running());
    assert!(!engine.backend().is_live());
    let notice = engine.take_notice().expect("user-facing notice");
    assert!(notice.text.contains("resumed") || notice.text.contains("restart"));
}

#[test]
fn foreground_reconciles_a_stale_running_flag() {
    let mut engine = engine();
    engine.start().unwrap();

    // The platform tore the nodes down behind our back.
    engine.backend_mut().kill_nodes();
    assert!(engine.is_running(), "flag is stale by construction");

    engine.handle_visibility(Visibility::Foreground);

    assert!(!engine.is_running());
    assert_eq!(engine.elapsed_display(), "00:00");
    assert!(engine.take_notice().is_some());
}

#[test]
fn backgrounding_on_a_suspending_platform_warns_the_user() {
    let config = EngineConfig {
        background_mode: true,
        platform_suspends_in_background: true,
    };
    let mut engine =
        PlaybackEngine::new(NullBackend::new(SAMPLE_RATE), Box::new(NoopWakeLock), config);
    engine.start().unwrap();

    engine.handle_visibility(Visibility::Background);

    let notice = engine.take_notice().expect("warning notice");
    assert_eq!(notice.severity, entrain_dsp::engine::Severity::Warning);
}

#[test]
fn backgrounding_while_idle_stays_quiet() {
    let config = EngineConfig {
        background_mode: true,
        platform_suspends_in_background: true,
    };
    let mut engine =
        PlaybackEngine::new(NullBackend::new(SAMPLE_RATE), Box::new(NoopWakeLock), config);

    engine.handle_visibility(Visibility::Background);
    engine.handle_visibility(Visibility::Foreground);

    assert!(engine.take_notice().is_none());
}

#[test]
fn oversized_beat_is_clamped_instead_of_going_non_positive() {
    let mut engine = engine();
    engine.set_carrier(100.0);
    engine.set_beat(300.0);
    engine.start().unwrap();

    let (left, right) = engine.channel_frequencies();
    assert!(left > 0.0);
    assert!(right > left);
    let voice = engine.backend().voice_params().unwrap();
    assert!(voice.left_hz > 0.0);
}
