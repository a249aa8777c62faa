/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use directconnect::error::CreatePublicVirtualInterfaceErrorKind;
use directconnect::model::{NewPublicVirtualInterface, RouteFilterPrefix, VirtualInterfaceState};
use directconnect::operation::CreatePublicVirtualInterface;
use directconnect::output::CreatePublicVirtualInterfaceOutput;
use directconnect::{Config, Region};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use protocol_test_helpers::{assert_ok, validate_body, validate_headers, MediaType};
use smithy_http::response::ParseStrictResponse;

fn body_of(request: &smithy_http::operation::Request) -> &str {
    std::str::from_utf8(request.http().body().bytes().unwrap()).unwrap()
}

fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
    http::Response::builder()
        .status(status)
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap()
}

#[test]
fn only_present_members_are_written() {
    let input = CreatePublicVirtualInterface::builder()
        .connection_id("dxcon-1")
        .new_public_virtual_interface(
            NewPublicVirtualInterface::builder()
                .route_filter_prefixes(RouteFilterPrefix::builder().cidr("10.0.0.0/24").build())
                .build(),
        )
        .build();
    let request = CreatePublicVirtualInterface::marshall(Some(&input)).unwrap();
    assert_eq!(
        body_of(&request),
        r#"{"connectionId":"dxcon-1","newPublicVirtualInterface":{"routeFilterPrefixes":[{"cidr":"10.0.0.0/24"}]}}"#
    );
    assert_ok(validate_headers(
        request.http(),
        &[
            ("Content-Type", "application/x-amz-json-1.1"),
            ("X-Amz-Target", "OvertureService.CreatePublicVirtualInterface"),
            ("Content-Length", "103"),
        ],
    ));
}

#[test]
fn full_request() {
    let config = Config::builder().region(Region::new("us-west-2")).build();
    let op = CreatePublicVirtualInterface::builder()
        .connection_id("dxcon-fg5678gh")
        .new_public_virtual_interface(
            NewPublicVirtualInterface::builder()
                .virtual_interface_name("PublicVirtualInterface")
                .vlan(2000)
                .asn(65000)
                .auth_key("asdf34example")
                .amazon_address("203.0.113.1/30")
                .customer_address("203.0.113.2/30")
                .route_filter_prefixes(RouteFilterPrefix::builder().cidr("203.0.113.0/30").build())
                .route_filter_prefixes(RouteFilterPrefix::builder().cidr("203.0.113.4/30").build())
                .build(),
        )
        .build()
        .make_operation(&config)
        .unwrap();
    assert_eq!(
        op.request().http().uri(),
        "https://directconnect.us-west-2.amazonaws.com/"
    );
    assert_eq!(
        body_of(op.request()),
        r#"{"connectionId":"dxcon-fg5678gh","newPublicVirtualInterface":{"virtualInterfaceName":"PublicVirtualInterface","vlan":2000,"asn":65000,"authKey":"asdf34example","amazonAddress":"203.0.113.1/30","customerAddress":"203.0.113.2/30","routeFilterPrefixes":[{"cidr":"203.0.113.0/30"},{"cidr":"203.0.113.4/30"}]}}"#
    );
}

#[test]
fn empty_route_filter_list_is_omitted() {
    let input = CreatePublicVirtualInterface::builder()
        .new_public_virtual_interface(
            NewPublicVirtualInterface::builder()
                .vlan(101)
                .set_route_filter_prefixes(Some(vec![]))
                .build(),
        )
        .build();
    let request = CreatePublicVirtualInterface::marshall(Some(&input)).unwrap();
    assert_ok(validate_body(
        body_of(&request),
        r#"{"newPublicVirtualInterface":{"vlan":101}}"#,
        MediaType::Json,
    ));
    assert_eq!(input.new_public_virtual_interface.unwrap().route_filter_prefixes, Some(vec![]));
}

#[test]
fn parse_virtual_interface() {
    let output = CreatePublicVirtualInterface::new()
        .parse(&response(
            200,
            r#"{
                "ownerAccount": "123456789012",
                "virtualInterfaceId": "dxvif-fgh0hcrk",
                "location": "EqDC2",
                "connectionId": "dxcon-fg5678gh",
                "virtualInterfaceType": "public",
                "virtualInterfaceName": "PublicVirtualInterface",
                "vlan": 2000,
                "asn": 65000,
                "amazonSideAsn": 64512,
                "authKey": "asdf34example",
                "amazonAddress": "203.0.113.1/30",
                "customerAddress": "203.0.113.2/30",
                "addressFamily": "ipv4",
                "virtualInterfaceState": "verifying",
                "customerRouterConfig": "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<logical_connection/>",
                "routeFilterPrefixes": [{"cidr": "203.0.113.0/30"}],
                "bgpPeers": [{"bgpPeerState": "verifying", "asn": 65000}]
            }"#,
        ))
        .unwrap();
    let expected = CreatePublicVirtualInterfaceOutput::builder()
        .owner_account("123456789012")
        .virtual_interface_id("dxvif-fgh0hcrk")
        .location("EqDC2")
        .connection_id("dxcon-fg5678gh")
        .virtual_interface_type("public")
        .virtual_interface_name("PublicVirtualInterface")
        .vlan(2000)
        .asn(65000)
        .auth_key("asdf34example")
        .amazon_address("203.0.113.1/30")
        .customer_address("203.0.113.2/30")
        .virtual_interface_state(VirtualInterfaceState::Verifying)
        .customer_router_config("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<logical_connection/>")
        .route_filter_prefixes(RouteFilterPrefix::builder().cidr("203.0.113.0/30").build())
        .build();
    assert_eq!(output, Some(expected));
}

#[test]
fn vlan_out_of_range_is_unhandled() {
    let err = CreatePublicVirtualInterface::new()
        .parse(&response(200, r#"{"vlan":4294967296}"#))
        .unwrap_err();
    assert!(matches!(
        err.kind,
        CreatePublicVirtualInterfaceErrorKind::Unhandled(_)
    ));
}

#[test]
fn parse_modeled_errors() {
    let err = CreatePublicVirtualInterface::new()
        .parse(&response(
            400,
            r#"{"__type":"DirectConnectClientException","message":"Connection dxcon-1 does not exist"}"#,
        ))
        .unwrap_err();
    assert!(err.is_direct_connect_client_exception());
    assert_eq!(
        err.to_string(),
        "DirectConnectClientException: Connection dxcon-1 does not exist"
    );

    let err = CreatePublicVirtualInterface::new()
        .parse(&response(500, r#"{"__type":"DirectConnectServerException"}"#))
        .unwrap_err();
    assert!(err.is_direct_connect_server_exception());
    assert!(!err.is_direct_connect_client_exception());
}

#[test]
fn set_connection_id_clears_the_member() {
    let input = CreatePublicVirtualInterface::builder()
        .connection_id("dxcon-1")
        .set_connection_id(None)
        .build();
    let request = CreatePublicVirtualInterface::marshall(Some(&input)).unwrap();
    assert_eq!(body_of(&request), "{}");
}

fn arb_new_public_virtual_interface() -> impl Strategy<Value = NewPublicVirtualInterface> {
    (
        proptest::option::of(".*"),
        proptest::option::of(any::<i32>()),
        proptest::option::of(any::<i32>()),
        proptest::option::of(".*"),
        proptest::option::of("[0-9./]{0,18}"),
        proptest::option::of("[0-9./]{0,18}"),
        proptest::option::of(proptest::collection::vec("[0-9./]{1,18}", 1..4)),
    )
        .prop_map(
            |(name, vlan, asn, auth_key, amazon_address, customer_address, cidrs)| {
                let mut builder = NewPublicVirtualInterface::builder().set_route_filter_prefixes(
                    cidrs.map(|cidrs| {
                        cidrs
                            .into_iter()
                            .map(|cidr| RouteFilterPrefix::builder().cidr(cidr).build())
                            .collect()
                    }),
                );
                if let Some(name) = name {
                    builder = builder.virtual_interface_name(name);
                }
                if let Some(vlan) = vlan {
                    builder = builder.vlan(vlan);
                }
                if let Some(asn) = asn {
                    builder = builder.asn(asn);
                }
                if let Some(auth_key) = auth_key {
                    builder = builder.auth_key(auth_key);
                }
                if let Some(address) = amazon_address {
                    builder = builder.amazon_address(address);
                }
                if let Some(address) = customer_address {
                    builder = builder.customer_address(address);
                }
                builder.build()
            },
        )
}

proptest! {
    #[test]
    fn virtual_interface_reads_back_as_result(
        connection_id in "[a-z0-9-]{1,16}",
        vif in arb_new_public_virtual_interface(),
    ) {
        let input = CreatePublicVirtualInterface::builder()
            .connection_id(connection_id.clone())
            .new_public_virtual_interface(vif.clone())
            .build();
        let request = CreatePublicVirtualInterface::marshall(Some(&input)).unwrap();
        let body = body_of(&request).to_string();

        // the whole request reads back with the nested interface skipped as unknown
        let output = CreatePublicVirtualInterface::new()
            .parse(&http::Response::builder().status(200).body(Bytes::from(body.clone())).unwrap())
            .unwrap()
            .unwrap();
        prop_assert_eq!(output.connection_id, Some(connection_id.clone()));
        prop_assert_eq!(output.vlan, None);

        let prefix = format!(r#"{{"connectionId":"{}","newPublicVirtualInterface":"#, connection_id);
        let nested = body
            .strip_prefix(prefix.as_str())
            .and_then(|rest| rest.strip_suffix('}'))
            .unwrap()
            .to_string();
        let output = CreatePublicVirtualInterface::new()
            .parse(&http::Response::builder().status(200).body(Bytes::from(nested)).unwrap())
            .unwrap()
            .unwrap();
        prop_assert_eq!(output.virtual_interface_name, vif.virtual_interface_name);
        prop_assert_eq!(output.vlan, vif.vlan);
        prop_assert_eq!(output.asn, vif.asn);
        prop_assert_eq!(output.auth_key, vif.auth_key);
        prop_assert_eq!(output.amazon_address, vif.amazon_address);
        prop_assert_eq!(output.customer_address, vif.customer_address);
        prop_assert_eq!(output.route_filter_prefixes, vif.route_filter_prefixes);
    }
}
