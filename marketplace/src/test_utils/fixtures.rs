//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::{AnalyticsMode, Config};
use crate::domain::entities::bundle::MigrationRule;
use crate::domain::entities::product::Price;
use crate::domain::entities::{Bundle, BundleId, MigrationRules, Product, ProductId};

/// Create a test product with default values
pub fn test_product(id: &str) -> Product {
    test_product_priced(id, "aquisicao", 1500.0, 0.0)
}

/// Create a recurring test product with a specific engine and price
pub fn test_product_priced(id: &str, engine: &str, mrr: f64, setup: f64) -> Product {
    Product {
        id: ProductId::from(id),
        name: format!("produto {}", id),
        category: "recorrente".to_string(),
        engine: engine.to_string(),
        module: "ia".to_string(),
        price: Price { mrr, setup },
        duration: "mensal".to_string(),
        ctas: vec!["demo".to_string()],
        tracking_events: vec!["product_viewed".to_string(), "cart_added".to_string()],
    }
}

/// A small catalog spanning several categories and engines
pub fn test_catalog() -> Vec<Product> {
    let mut audit = test_product_priced("quickwin.auditoria", "aquisicao", 0.0, 2500.0);
    audit.category = "quickwin".to_string();
    audit.module = "diagnostico".to_string();

    let mut consulting = test_product_priced("projeto.consultoria", "orquestracao", 0.0, 0.0);
    consulting.category = "projeto".to_string();
    consulting.module = "consultoria".to_string();

    vec![
        test_product_priced("recorrente.sofia_ia_sdr", "aquisicao", 1997.0, 0.0),
        audit,
        test_product_priced("recorrente.otto_ops", "operacao", 2997.0, 1500.0),
        test_product_priced("recorrente.retencao_nps", "retencao", 997.0, 0.0),
        consulting,
    ]
}

/// Create a test bundle; its name is the id without the `bundle.` prefix
pub fn test_bundle(id: &str, upgrade_path: Option<&str>) -> Bundle {
    Bundle {
        id: BundleId::from(id),
        name: id.replacen("bundle.", "", 1),
        description: format!("pacote {}", id),
        mrr: 2997.0,
        setup: 0.0,
        products: vec!["recorrente.sofia_ia_sdr".to_string()],
        savings: 0.0,
        upgrade_path: upgrade_path.map(String::from),
    }
}

/// Four bundles `bundle.s0` to `bundle.s3`, each upgrading to the next
pub fn test_bundles() -> Vec<Bundle> {
    (0..4)
        .map(|i| {
            let next = format!("bundle.s{}", i + 1);
            let mut bundle = test_bundle(
                &format!("bundle.s{}", i),
                if i < 3 { Some(next.as_str()) } else { None },
            );
            bundle.mrr = 1000.0 * (i + 1) as f64;
            bundle
        })
        .collect()
}

pub fn test_migration_rules() -> MigrationRules {
    MigrationRules {
        a_la_carte_to_bundle: MigrationRule {
            trigger: "roi_comprovado".to_string(),
            discount: 0.2,
        },
        bundle_upgrade: MigrationRule {
            trigger: "uso_80".to_string(),
            discount: 0.1,
        },
    }
}

/// Config for router tests: no delays, no rate limiting
pub fn test_config() -> Config {
    Config {
        port: 0,
        config_base_url: "http://127.0.0.1:0".to_string(),
        tenant: "hivefy".to_string(),
        config_dir: PathBuf::from("../configs"),
        fetch_timeout: Duration::from_secs(1),
        journey_delay: Duration::ZERO,
        analytics_mode: AnalyticsMode::Noop,
        analytics_url: None,
        ga_measurement_id: None,
        surface_load_errors: false,
        rate_limit: false,
    }
}
