//! Shared fixtures for pricing tests.

use rust_decimal::Decimal;
use shared::models::{
    ArmLogic, Compatibility, InterventionZone, LambrequinEnroulablePrices, OptionKey, OptionPrices,
    PriceStep, PriceTier, PricingConfig, StoreModel, TransportRule,
};
use std::collections::BTreeMap;

pub fn dec(value: i64) -> Decimal {
    Decimal::from(value)
}

fn tier(max_width_mm: u32, price: i64) -> PriceTier {
    PriceTier {
        max_width_mm,
        purchase_price_ht: dec(price),
    }
}

fn step(max_width_mm: u32, price: i64) -> PriceStep {
    PriceStep {
        max_width_mm,
        price_ht: dec(price),
    }
}

/// A compact model with every option flag on.
pub fn make_model() -> StoreModel {
    let mut buy_prices = BTreeMap::new();
    buy_prices.insert(1500, vec![tier(2390, 1053), tier(3570, 1185)]);
    buy_prices.insert(
        2000,
        vec![tier(2470, 1095), tier(3650, 1125), tier(4830, 1154)],
    );

    let mut min_widths = BTreeMap::new();
    min_widths.insert(1500, 1840);
    min_widths.insert(2000, 1840);

    StoreModel {
        id: "kissimy".into(),
        name: "KISSIMY".into(),
        slug: "store-banne-coffre-kissimy".into(),
        compatibility: Compatibility {
            led_arms: true,
            led_box: true,
            lambrequin_fixe: true,
            lambrequin_enroulable: true,
            ceiling_mount: true,
            auvent: true,
        },
        arm_logic: ArmLogic::Standard2,
        min_widths,
        buy_prices,
        led_box_price: None,
        ceiling_mount_prices: Some(vec![step(2470, 39), step(6000, 55)]),
    }
}

pub fn make_option_prices() -> OptionPrices {
    let mut led_arms = BTreeMap::new();
    led_arms.insert(
        1500,
        BTreeMap::from([(2u8, dec(441)), (3, dec(562)), (4, dec(721)), (6, dec(1125))]),
    );
    led_arms.insert(
        2000,
        BTreeMap::from([(2u8, dec(481)), (3, dec(624)), (4, dec(805)), (6, dec(1248))]),
    );

    OptionPrices {
        led_arms,
        led_cassette: dec(150),
        lambrequin_fixe: dec(50),
        lambrequin_enroulable: LambrequinEnroulablePrices {
            manual: vec![step(2400, 357), step(3580, 457), step(4800, 531), step(6000, 633)],
            motorized: vec![step(2400, 518), step(3580, 641), step(4800, 722), step(6000, 838)],
        },
        auvent_per_meter: dec(45),
        frame_color_custom: dec(138),
        transport: TransportRule {
            width_threshold_mm: 3650,
            fee_ht: dec(139),
        },
    }
}

pub fn make_config() -> PricingConfig {
    let mut config = PricingConfig {
        default_coefficient: Decimal::new(18, 1), // 1.8
        ..Default::default()
    };
    config
        .model_coefficients
        .insert("kissimy".into(), Decimal::new(2, 0));
    config
        .option_coefficients
        .insert(OptionKey::LedArms, Decimal::new(2, 0));
    config
        .option_coefficients
        .insert(OptionKey::LambrequinFixe, Decimal::new(15, 1));
    config
}

pub fn make_zones() -> BTreeMap<String, InterventionZone> {
    let mut zones = BTreeMap::new();
    zones.insert(
        "91".into(),
        InterventionZone {
            name: "Essonne".into(),
            lead_time: "5-7 jours".into(),
            available: true,
            travel_surcharge_ht: dec(50),
            base_install_ht: dec(500),
            per_extra_meter_ht: dec(100),
        },
    );
    zones.insert(
        "75".into(),
        InterventionZone {
            name: "Paris".into(),
            lead_time: "5-7 jours".into(),
            available: true,
            travel_surcharge_ht: dec(0),
            base_install_ht: dec(500),
            per_extra_meter_ht: dec(100),
        },
    );
    zones.insert(
        "20".into(),
        InterventionZone {
            name: "Corse".into(),
            lead_time: "sur devis".into(),
            available: false,
            travel_surcharge_ht: dec(300),
            base_install_ht: dec(500),
            per_extra_meter_ht: dec(100),
        },
    );
    zones
}
