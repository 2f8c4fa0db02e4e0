//! End-to-end quote flow against the shipped catalog documents:
//! load → validate → price → breakdown consistency.

use std::path::Path;

use quote_server::catalog::{CatalogService, load_catalog, load_pricing_config};
use quote_server::pricing::{QuoteRequest, build_quote, calculate_installation_cost};
use rust_decimal::Decimal;
use shared::QuoteError;
use shared::models::{LambrequinChoice, OptionSelection, PricingConfig};

fn data_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
}

fn dec(value: i64) -> Decimal {
    Decimal::from(value)
}

fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

#[test]
fn shipped_catalog_loads_and_validates() {
    let catalog = load_catalog(data_dir()).unwrap();
    assert!(catalog.models.len() >= 3);
    assert!(catalog.zones.len() >= 19);

    let config = load_pricing_config(data_dir()).unwrap();
    assert!(config.default_coefficient > Decimal::ONE);
}

#[test]
fn bare_configuration_quote() {
    let catalog = load_catalog(data_dir()).unwrap();
    let config = load_pricing_config(data_dir()).unwrap();

    let model = catalog.model_by_slug("store-banne-coffre-kissimy").unwrap();
    let request = QuoteRequest {
        model_id: model.id.clone(),
        width_mm: 3000,
        projection_mm: 1500,
        options: OptionSelection::default(),
        postal_code: None,
        installed_by_pro: false,
    };
    let breakdown = build_quote(&catalog, &config, &request).unwrap();

    // Tier 3650 accommodates 3000 mm: 1039 purchase, × 2.0 model coefficient.
    assert_eq!(breakdown.base_purchase_ht, dec(1039));
    assert_eq!(breakdown.total_ht, dec(2078));
    assert_eq!(breakdown.total_ttc, cents(249360)); // × 1.20
    assert!(breakdown.installation.is_none());
    assert!(breakdown.transport.is_none());
}

#[test]
fn fully_optioned_quote_with_installation() {
    let catalog = load_catalog(data_dir()).unwrap();
    let config = load_pricing_config(data_dir()).unwrap();

    let request = QuoteRequest {
        model_id: "kissimy".into(),
        width_mm: 4000,
        projection_mm: 2000,
        options: OptionSelection {
            led_arms: true,
            lambrequin: LambrequinChoice::Enroulable { motorized: true },
            ceiling_mount: true,
            auvent: true,
            custom_frame_color: true,
            ..Default::default()
        },
        postal_code: Some("91000".into()),
        installed_by_pro: false,
    };
    let breakdown = build_quote(&catalog, &config, &request).unwrap();

    // Base: tier 4830 → 1154 × 2.0.
    assert_eq!(breakdown.base_sale_ht, dec(2308));
    // LED arms (2-arm kit, projection 2000): 481 × 2.0.
    // Rolling lambrequin motorized (step 4800): 722 × 1.8.
    // Ceiling mount: 39 × 1.6. Auvent: 45 × 4 m × 1.7. Custom RAL: 138 × 1.8.
    let option_total: Decimal = breakdown
        .option_lines
        .iter()
        .map(|line| line.sale_ht)
        .sum();
    assert_eq!(option_total, cents(287840)); // 962 + 1299.60 + 62.40 + 306 + 248.40

    // 4000 mm > 3650 mm: long transport at cost.
    let transport = breakdown.transport.as_ref().unwrap();
    assert_eq!(transport.fee_ht, dec(139));

    assert_eq!(breakdown.total_ht, cents(532540));
    assert_eq!(breakdown.total_ttc, cents(639048)); // × 1.20

    // The itemization re-sums to the reported total exactly.
    assert_eq!(breakdown.resum_ht(), breakdown.total_ht);

    // Installation is an independent line, never margined.
    let install = breakdown.installation.as_ref().unwrap();
    assert!(install.available);
    assert_eq!(install.zone_name.as_deref(), Some("Essonne"));
    assert_eq!(install.base_install_ht, Some(dec(500)));
    assert_eq!(install.travel_surcharge_ht, Some(dec(50)));
    assert_eq!(install.total_ht, Some(dec(550)));
}

#[test]
fn professional_installation_switches_whole_quote_to_reduced_vat() {
    let catalog = load_catalog(data_dir()).unwrap();
    let config = load_pricing_config(data_dir()).unwrap();

    let mut request = QuoteRequest {
        model_id: "kissimy".into(),
        width_mm: 3000,
        projection_mm: 1500,
        options: OptionSelection::default(),
        postal_code: Some("75011".into()),
        installed_by_pro: true,
    };
    let reduced = build_quote(&catalog, &config, &request).unwrap();
    assert_eq!(reduced.vat_rate, cents(10));
    assert_eq!(reduced.total_ttc, cents(228580)); // 2078 × 1.10

    request.installed_by_pro = false;
    let standard = build_quote(&catalog, &config, &request).unwrap();
    assert_eq!(standard.vat_rate, cents(20));
    assert_eq!(standard.total_ttc, cents(249360));
}

#[test]
fn out_of_range_dimensions_fail_fast() {
    let catalog = load_catalog(data_dir()).unwrap();
    let config = load_pricing_config(data_dir()).unwrap();

    // Kissimy stops at 4830 mm.
    let request = QuoteRequest {
        model_id: "kissimy".into(),
        width_mm: 5200,
        projection_mm: 2000,
        options: OptionSelection::default(),
        postal_code: None,
        installed_by_pro: false,
    };
    assert!(matches!(
        build_quote(&catalog, &config, &request).unwrap_err(),
        QuoteError::OutOfRange { width_mm: 5200, .. }
    ));

    // 1600 mm is not a defined projection.
    let request = QuoteRequest {
        model_id: "kissimy".into(),
        width_mm: 3000,
        projection_mm: 1600,
        options: OptionSelection::default(),
        postal_code: None,
        installed_by_pro: false,
    };
    assert!(matches!(
        build_quote(&catalog, &config, &request).unwrap_err(),
        QuoteError::UnknownProjection { .. }
    ));
}

#[test]
fn installation_scales_above_six_meters() {
    let catalog = load_catalog(data_dir()).unwrap();

    let flat = calculate_installation_cost(6000, "75001", &catalog.zones).unwrap();
    assert_eq!(flat.total_ht, Some(dec(500)));

    // One millimetre over the base width bills a full surplus meter.
    let one_over = calculate_installation_cost(6001, "75001", &catalog.zones).unwrap();
    assert_eq!(one_over.total_ht, Some(dec(600)));

    let uncovered = calculate_installation_cost(6000, "13001", &catalog.zones).unwrap();
    assert!(!uncovered.available);
    assert_eq!(uncovered.total_ht, None);
}

#[test]
fn coefficient_update_swaps_snapshot_atomically() {
    let catalog = load_catalog(data_dir()).unwrap();
    let config = load_pricing_config(data_dir()).unwrap();
    let service = CatalogService::new(catalog, config);

    let before = service.pricing();
    let mut updated: PricingConfig = before.as_ref().clone();
    updated
        .model_coefficients
        .insert("antibes".into(), cents(185)); // 1.85
    service.update_pricing(updated).unwrap();

    let after = service.pricing();
    assert_eq!(after.store_coefficient("antibes"), cents(185));
    // The snapshot taken before the update still prices the old way.
    assert_eq!(before.store_coefficient("antibes"), cents(180));
}
