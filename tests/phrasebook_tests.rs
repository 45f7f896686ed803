//! Golden phrasebook and configuration fixtures.

use olde_english::core::reply::{message_reply, slash_reply, Reply};
use olde_english::schema::config::EngineConfig;
use olde_english::schema::phrasebook::Phrasebook;
use olde_english::{OldeEngine, Style};
use std::path::Path;

#[test]
fn golden_phrasebook_passes() {
    let book = Phrasebook::load_from_ron(Path::new("tests/fixtures/phrasebook.ron")).unwrap();
    assert!(book.cases.len() >= 15);

    let mismatches = book.check();
    for m in &mismatches {
        eprintln!(
            "case {}: {:?}\n  expected {:?}\n  actual   {:?}",
            m.index, m.input, m.expected, m.actual
        );
    }
    assert!(mismatches.is_empty(), "{} phrasebook mismatches", mismatches.len());
}

#[test]
fn engine_config_fixture_loads() {
    let config = EngineConfig::load_from_ron(Path::new("tests/fixtures/engine.ron")).unwrap();
    assert_eq!(config.seed, Some(2024));
    assert_eq!(config.default_style, Style::Bardic);
    assert_eq!(config.reply_limit, 120);
}

#[test]
fn configured_engine_replies_within_limit() {
    let config = EngineConfig::load_from_ron(Path::new("tests/fixtures/engine.ron")).unwrap();
    let mut engine = OldeEngine::builder().from_config(&config).build();

    let long = "you are very kind ".repeat(20);
    let reply = slash_reply(&mut engine, &long, None, config.reply_limit);
    assert!(matches!(reply, Reply::Public(_)));
    assert_eq!(reply.text().chars().count(), config.reply_limit);

    let reply = message_reply(&mut engine, Some("you are very kind"), config.reply_limit);
    assert_eq!(reply.text(), "thou art right kind");
}

#[test]
fn configured_seed_is_reproducible() {
    let config = EngineConfig::load_from_ron(Path::new("tests/fixtures/engine.ron")).unwrap();
    let mut a = OldeEngine::builder().from_config(&config).build();
    let mut b = OldeEngine::builder().from_config(&config).build();
    for _ in 0..5 {
        assert_eq!(a.olde_ify("hello"), b.olde_ify("hello"));
    }
}
