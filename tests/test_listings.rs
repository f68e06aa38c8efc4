//! Listing and offer query integration tests.

mod common;

use common::StaticTransport;

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[test]
fn list_parses_listing_fields() {
    let sdk = StaticTransport::new()
        .with_data(
            "GetListings",
            common::listings_page(
                vec![common::sample_listing(
                    "lst-1",
                    "crypto.eth",
                    "token-1",
                    "1500000000000000000",
                    18,
                )],
                7,
            ),
        )
        .into_sdk();

    let page = sdk.listings().list(20, 0).unwrap();
    assert_eq!(page.total_count, 7);
    assert_eq!(page.items.len(), 1);

    let listing = &page.items[0];
    assert_eq!(listing.id, "lst-1");
    assert_eq!(listing.name, "crypto.eth");
    assert_eq!(listing.price, "1500000000000000000");
    assert_eq!(listing.currency.symbol, "ETH");
    assert_eq!(listing.currency.decimals, 18);
    assert_eq!(listing.chain.as_ref().unwrap().network_id, "eip155:97476");
}

#[test]
fn list_rejects_negative_arguments() {
    let sdk = StaticTransport::new()
        .with_data("GetListings", common::listings_page(vec![], 0))
        .into_sdk();

    assert!(sdk.listings().list(10, -5).is_err());
}

#[test]
fn list_propagates_graphql_errors() {
    let sdk = StaticTransport::new()
        .with_graphql_error("GetListings", "upstream unavailable")
        .into_sdk();

    assert!(sdk.listings().list(20, 0).is_err());
}

// ---------------------------------------------------------------------------
// offers
// ---------------------------------------------------------------------------

#[test]
fn offers_relabel_listings_and_are_degraded() {
    let sdk = StaticTransport::new()
        .with_data(
            "GetListings",
            common::listings_page(
                vec![
                    common::sample_listing("lst-1", "crypto.eth", "token-1", "100", 6),
                    common::sample_listing("lst-2", "nft.eth", "token-2", "200", 6),
                ],
                2,
            ),
        )
        .into_sdk();

    let outcome = sdk.listings().offers(50).unwrap();
    assert!(outcome.is_degraded());
    assert!(outcome.reason().unwrap().contains("relabeled"));

    let page = outcome.into_inner();
    assert_eq!(page.total_count, 2);
    assert_eq!(page.items.len(), 2);

    // The listing's offerer becomes the buyer
    let offer = &page.items[0];
    assert_eq!(offer.domain_name, "crypto.eth");
    assert_eq!(offer.buyer, "0xabcdefabcdefabcdefabcdefabcdefabcdefabcd");
    assert_eq!(offer.registrar.as_deref(), Some("D3 Registrar"));
}
