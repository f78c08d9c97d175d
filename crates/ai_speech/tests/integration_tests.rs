//! Integration tests for ai_speech crate
//!
//! Exercises configuration loading and provider behavior without
//! requiring espeak-ng to be installed.

use ai_speech::{EspeakProvider, SpeechConfig, SpeechEngine, SpeechError};

/// Configuration pointing at a synthesizer that cannot exist
fn absent_synth_config() -> SpeechConfig {
    SpeechConfig {
        executable: "/nonexistent/bin/espeak-ng".to_string(),
        ..Default::default()
    }
}

// ============ Configuration Tests ============

#[test]
fn config_loads_from_toml() {
    let raw = r#"
        executable = "espeak-ng"
        voice = "de"
        rate_wpm = 160
        amplitude = 120
    "#;

    let config: SpeechConfig = toml::from_str(raw).unwrap();
    assert_eq!(config.voice, "de");
    assert_eq!(config.rate_wpm, 160);
    assert_eq!(config.amplitude, 120);
    assert!(config.validate().is_ok());
}

#[test]
fn config_toml_defaults_missing_fields() {
    let config: SpeechConfig = toml::from_str("voice = \"en-gb\"").unwrap();
    assert_eq!(config.voice, "en-gb");
    assert_eq!(config.executable, "espeak-ng");
    assert_eq!(config.rate_wpm, 175);
}

#[test]
fn invalid_toml_config_fails_validation() {
    let config: SpeechConfig = toml::from_str("rate_wpm = 9999").unwrap();
    assert!(config.validate().is_err());
}

// ============ Provider Behavior Tests ============

#[tokio::test]
async fn announcing_without_synthesizer_reports_not_available() {
    let provider = EspeakProvider::new(absent_synth_config()).unwrap();

    let result = provider.speak("the description").await;

    match result {
        Err(SpeechError::NotAvailable(msg)) => {
            assert!(msg.contains("/nonexistent/bin/espeak-ng"));
        }
        other => panic!("expected NotAvailable, got {other:?}"),
    }
}

#[tokio::test]
async fn availability_probe_is_quiet_on_missing_binary() {
    let provider = EspeakProvider::new(absent_synth_config()).unwrap();
    assert!(!provider.is_available().await);
}

#[tokio::test]
async fn stop_and_shutdown_succeed_with_nothing_playing() {
    let provider = EspeakProvider::new(absent_synth_config()).unwrap();
    assert!(provider.stop().await.is_ok());
    assert!(provider.shutdown().await.is_ok());
}

#[tokio::test]
async fn voice_probe_propagates_missing_binary() {
    let provider = EspeakProvider::new(absent_synth_config()).unwrap();
    assert!(provider.probe_voice().await.is_err());
}
