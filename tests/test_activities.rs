//! Token activity query integration tests.

mod common;

use common::StaticTransport;
use doma_sdk::models::Activity;

#[test]
fn for_token_parses_discriminated_activities() {
    let sdk = StaticTransport::new()
        .with_data(
            "GetTokenActivities",
            common::activities_page(
                vec![
                    common::minted_activity("2025-01-01T00:00:00Z"),
                    common::purchased_activity(
                        "0x1111111111111111111111111111111111111111",
                        "0x2222222222222222222222222222222222222222",
                        "5000000",
                        "USDC",
                    ),
                ],
                2,
            ),
        )
        .into_sdk();

    let page = sdk.activities().for_token("token-1", 10).unwrap();
    assert_eq!(page.items.len(), 2);

    match &page.items[0] {
        Activity::Minted { created_at } => {
            assert_eq!(created_at.as_deref(), Some("2025-01-01T00:00:00Z"));
        }
        other => panic!("expected minted activity, got {:?}", other),
    }

    match &page.items[1] {
        Activity::Purchased {
            buyer,
            seller,
            payment,
        } => {
            assert!(buyer.starts_with("0x1111"));
            assert!(seller.starts_with("0x2222"));
            assert_eq!(payment.price, "5000000");
            assert_eq!(payment.currency_symbol, "USDC");
        }
        other => panic!("expected purchased activity, got {:?}", other),
    }
}

#[test]
fn for_token_tolerates_unknown_activity_kinds() {
    let sdk = StaticTransport::new()
        .with_data(
            "GetTokenActivities",
            common::activities_page(
                vec![serde_json::json!({ "__typename": "TokenTransferredActivity" })],
                1,
            ),
        )
        .into_sdk();

    let page = sdk.activities().for_token("token-1", 10).unwrap();
    assert!(matches!(page.items[0], Activity::Other));
}

#[test]
fn for_token_propagates_errors() {
    let sdk = StaticTransport::new()
        .with_graphql_error("GetTokenActivities", "token not indexed")
        .into_sdk();

    assert!(sdk.activities().for_token("token-1", 10).is_err());
}
