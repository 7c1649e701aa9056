//! Unit tests for the vote-based classifier

use crate::fixtures::{falling_candles, flat_candles, rising_candles, series};
use perpscan::config::{Config, IndicatorSettings, VoteThresholds};
use perpscan::models::{IndicatorSnapshot, Signal, VoteTally};
use perpscan::signals::{ClassificationUnavailable, SignalClassifier};

fn classifier() -> SignalClassifier {
    SignalClassifier::new(&Config::default())
}

fn snapshot() -> IndicatorSnapshot {
    IndicatorSnapshot {
        close: 100.0,
        trend_estimate: 100.0,
        trend_oscillator: 0.0,
        momentum: 50.0,
        trend_strength: 15.0,
        upper_band: 110.0,
        lower_band: 90.0,
    }
}

#[test]
fn test_absent_series_is_neutral() {
    let classifier = classifier();
    assert_eq!(classifier.signal(None), Signal::Neutral);
    assert_eq!(
        classifier.classify(None),
        Err(ClassificationUnavailable::MissingSeries)
    );
}

#[test]
fn test_short_history_is_neutral() {
    let classifier = classifier();
    let s = series("BTCUSDT", rising_candles(99));
    assert_eq!(classifier.signal(Some(&s)), Signal::Neutral);
    assert_eq!(
        classifier.classify(Some(&s)),
        Err(ClassificationUnavailable::InsufficientHistory {
            bars: 99,
            required: 100
        })
    );

    let empty = series("BTCUSDT", Vec::new());
    assert_eq!(classifier.signal(Some(&empty)), Signal::Neutral);
}

#[test]
fn test_minimum_history_is_enough() {
    let s = series("BTCUSDT", rising_candles(100));
    assert_eq!(classifier().signal(Some(&s)), Signal::Long);
}

#[test]
fn test_steady_uptrend_is_long_on_every_criterion() {
    let s = series("BTCUSDT", rising_candles(150));
    let verdict = classifier().classify(Some(&s)).unwrap();

    assert_eq!(verdict.signal, Signal::Long);
    assert_eq!(verdict.tally, VoteTally { long: 5, short: 2 });
}

#[test]
fn test_steady_downtrend_is_short() {
    let s = series("ETHUSDT", falling_candles(150));
    let verdict = classifier().classify(Some(&s)).unwrap();

    assert_eq!(verdict.signal, Signal::Short);
    assert_eq!(verdict.tally, VoteTally { long: 2, short: 5 });
}

#[test]
fn test_flat_market_is_neutral() {
    let s = series("XRPUSDT", flat_candles(150, 0.5));
    assert_eq!(classifier().signal(Some(&s)), Signal::Neutral);
}

#[test]
fn test_classification_is_deterministic() {
    let s = series("BTCUSDT", rising_candles(150));
    let classifier = classifier();
    assert_eq!(classifier.classify(Some(&s)), classifier.classify(Some(&s)));
}

#[test]
fn test_quiet_snapshot_only_counts_band_votes() {
    // neither side of the EMA, MACD flat, RSI mid-range, ADX below threshold
    let classifier = classifier();
    let tally = classifier.tally(&snapshot());
    assert_eq!(tally, VoteTally { long: 1, short: 1 });
    assert_eq!(classifier.decide(&tally), Signal::Neutral);
}

#[test]
fn test_thresholds_are_strict() {
    let classifier = classifier();
    let at_thresholds = IndicatorSnapshot {
        momentum: 55.0,
        trend_strength: 20.0,
        close: 110.0,
        ..snapshot()
    };
    // close > EMA only; RSI 55, ADX 20 and close == upper do not count
    assert_eq!(classifier.tally(&at_thresholds).long, 1);

    let short_side = IndicatorSnapshot {
        momentum: 45.0,
        close: 90.0,
        ..snapshot()
    };
    assert_eq!(classifier.tally(&short_side).short, 1);
}

#[test]
fn test_long_wins_a_tie_at_quorum() {
    let contested = IndicatorSnapshot {
        close: 101.0,
        trend_estimate: 100.0,
        trend_oscillator: -0.5,
        momentum: 50.0,
        trend_strength: 25.0,
        upper_band: 110.0,
        lower_band: 90.0,
    };
    let classifier = classifier();
    let tally = classifier.tally(&contested);
    assert_eq!(tally, VoteTally { long: 3, short: 3 });
    assert_eq!(classifier.decide(&tally), Signal::Long);
}

#[test]
fn test_decide_quorum() {
    let classifier = classifier();
    assert_eq!(classifier.decide(&VoteTally { long: 2, short: 2 }), Signal::Neutral);
    assert_eq!(classifier.decide(&VoteTally { long: 2, short: 3 }), Signal::Short);
    assert_eq!(classifier.decide(&VoteTally { long: 3, short: 0 }), Signal::Long);
    assert_eq!(classifier.decide(&VoteTally::default()), Signal::Neutral);
}

#[test]
fn test_custom_thresholds() {
    let strict = SignalClassifier::with_settings(
        IndicatorSettings::default(),
        VoteThresholds {
            quorum: 5,
            ..VoteThresholds::default()
        },
    );
    assert_eq!(strict.thresholds().quorum, 5);
    assert_eq!(strict.bank().min_history(), 100);
    assert_eq!(strict.decide(&VoteTally { long: 4, short: 0 }), Signal::Neutral);

    let s = series("BTCUSDT", rising_candles(150));
    assert_eq!(strict.signal(Some(&s)), Signal::Long);
}

#[test]
fn test_signal_labels() {
    assert_eq!(Signal::Long.to_string(), "long");
    assert_eq!(Signal::Short.label(), "short");
    assert_eq!(Signal::Neutral.to_string(), "neutral");
}
