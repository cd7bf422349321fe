//! Catalog ingestion and projection against a real SQLite file.

mod support;

use rust_decimal_macros::dec;
use support::catalog::{feed, league, offer, offer_at, price_of, section};
use support::temp_db::TempDb;
use wagerbook::domain::error::DomainError;
use wagerbook::domain::{Market, Price, Section};
use wagerbook::error::Error;
use wagerbook::port::outbound::CatalogStore;

#[test]
fn import_then_project_leagues() {
    let db = TempDb::create("catalog-import");
    let services = db.services();

    let summary = services.catalog.import(
        &feed(vec![
            league("Serie A", vec![section(&["1", "X", "2"], &[10, 11])]),
            league("Bundesliga", vec![section(&["1", "2"], &[20])]),
        ]),
        &[],
    );
    assert_eq!(summary.leagues, 2);
    assert_eq!(summary.sections, 2);
    assert_eq!(summary.markets, 5);
    assert_eq!(summary.skipped, 0);

    let leagues = services.catalog.leagues().unwrap();
    let names: Vec<&str> = leagues.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Bundesliga", "Serie A"]);

    let serie_a = &leagues[1];
    assert_eq!(serie_a.sections.len(), 1);
    assert_eq!(serie_a.sections[0].offer_ids, vec![10, 11]);
    // markets come back in name order
    assert_eq!(
        serie_a.sections[0].markets,
        vec![Market::new("1"), Market::new("2"), Market::new("X")]
    );
}

#[test]
fn league_with_no_sections_projects_one_empty_section() {
    let db = TempDb::create("catalog-empty-league");
    db.catalog_store().insert_league("Empty").unwrap();

    let leagues = db.services().catalog.leagues().unwrap();
    assert_eq!(leagues.len(), 1);
    assert_eq!(leagues[0].sections, vec![Section::default()]);
}

#[test]
fn reimporting_a_league_reuses_its_id() {
    let db = TempDb::create("catalog-reimport");
    let store = db.catalog_store();

    let first = store.insert_league("Premier").unwrap();
    let summary = db
        .services()
        .catalog
        .import(&feed(vec![league("Premier", vec![section(&["1"], &[1])])]), &[]);

    assert_eq!(summary.leagues, 1);
    assert_eq!(store.insert_league("Premier").unwrap(), first);
    assert_eq!(db.services().catalog.leagues().unwrap().len(), 1);
}

#[test]
fn offers_merge_prices_per_id() {
    let db = TempDb::create("catalog-offers");
    let catalog = db.services().catalog;

    catalog
        .create_offer(&offer_at(
            1,
            "2026-05-20T18:00:00Z",
            &[("1", dec!(1.85)), ("X", dec!(3.40)), ("2", dec!(4.10))],
        ))
        .unwrap();
    catalog
        .create_offer(&offer_at(2, "2026-05-21T18:00:00Z", &[("1", dec!(2.00))]))
        .unwrap();
    catalog
        .create_offer(&offer_at(3, "2026-05-19T18:00:00Z", &[]))
        .unwrap();

    let offers = catalog.offers().unwrap();
    let ids: Vec<i32> = offers.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![2, 1, 3]);
    assert_eq!(offers[1].prices.len(), 3);
    assert!(offers[2].prices.is_empty());

    let one = catalog.offer(1).unwrap();
    assert_eq!(price_of(&one, "X"), Some(dec!(3.40)));
}

#[test]
fn offer_round_trips_optional_fields() {
    let db = TempDb::create("catalog-optional");
    let catalog = db.services().catalog;

    let mut created = offer(7, &[("1", dec!(1.5))]);
    created.tv_channel = Some("Sport 1".into());
    created.has_stats = true;
    catalog.create_offer(&created).unwrap();

    assert_eq!(catalog.offer(7).unwrap(), created);
}

#[test]
fn unknown_offer_is_not_found() {
    let db = TempDb::create("catalog-missing");
    let err = db.services().catalog.offer(404).unwrap_err();
    assert!(matches!(err, Error::NotFound { entity: "offer", .. }));
    assert!(err.is_user_error());
}

#[test]
fn invalid_offer_is_rejected_before_storage() {
    let db = TempDb::create("catalog-invalid");
    let catalog = db.services().catalog;

    let err = catalog
        .create_offer(&offer(1, &[("1", dec!(0))]))
        .unwrap_err();
    assert!(matches!(err, Error::Domain(_)));
    assert!(catalog.offers().unwrap().is_empty());
}

#[test]
fn offer_ids_must_be_positive() {
    let db = TempDb::create("catalog-offer-id");
    let catalog = db.services().catalog;

    let err = catalog.create_offer(&offer(0, &[])).unwrap_err();
    assert!(matches!(
        err,
        Error::Domain(DomainError::NonPositiveOfferId { id: 0 })
    ));

    let summary = catalog.import(&feed(vec![]), &[offer(-1, &[]), offer(2, &[])]);
    assert_eq!(summary.offers, 1);
    assert_eq!(summary.skipped, 1);
    let ids: Vec<i32> = catalog.offers().unwrap().iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn add_price_to_existing_offer() {
    let db = TempDb::create("catalog-add-price");
    let catalog = db.services().catalog;
    catalog.create_offer(&offer(1, &[("1", dec!(1.5))])).unwrap();

    catalog.add_price(1, &Price::new(dec!(2.25), "2")).unwrap();
    assert_eq!(price_of(&catalog.offer(1).unwrap(), "2"), Some(dec!(2.25)));

    let err = catalog.add_price(9, &Price::new(dec!(2), "1")).unwrap_err();
    assert!(matches!(err, Error::NotFound { entity: "offer", .. }));
}

#[test]
fn import_skips_duplicate_offers_and_keeps_going() {
    let db = TempDb::create("catalog-skip");
    let catalog = db.services().catalog;

    let summary = catalog.import(
        &feed(vec![]),
        &[
            offer(1, &[("1", dec!(1.5))]),
            offer(1, &[("1", dec!(9.9))]),
            offer(2, &[("2", dec!(2.5))]),
        ],
    );

    assert_eq!(summary.offers, 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(price_of(&catalog.offer(1).unwrap(), "1"), Some(dec!(1.5)));
}

#[test]
fn feed_with_source_field_names_decodes() {
    let raw = r#"{
        "lige": [
            { "naziv": "Premier", "razrade": [
                { "tipovi": [{ "naziv": "1" }, { "naziv": "X" }], "ponude": [1] }
            ] }
        ]
    }"#;
    let decoded: wagerbook::domain::LeagueFeed = serde_json::from_str(raw).unwrap();
    assert_eq!(decoded.leagues[0].name, "Premier");
    assert_eq!(decoded.leagues[0].sections[0].offer_ids, vec![1]);

    let raw_offers = r#"[{
        "broj": "0001", "id": 1, "naziv": "A - B",
        "vrijeme": "2026-05-20T18:00:00Z",
        "tecajevi": [{ "tecaj": 1.85, "naziv": "1" }],
        "ima_statistiku": true
    }]"#;
    let offers: Vec<wagerbook::domain::Offer> = serde_json::from_str(raw_offers).unwrap();
    assert_eq!(offers[0].prices[0].value, dec!(1.85));
    assert!(offers[0].has_stats);
}
