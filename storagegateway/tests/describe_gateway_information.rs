/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::os_shim_internal::Env;
use aws_types::region::EnvironmentProvider;
use bytes::Bytes;
use pretty_assertions::assert_eq;
use protocol_test_helpers::{assert_ok, validate_body, validate_headers, MediaType};
use smithy_http::response::ParseStrictResponse;
use storagegateway::error::DescribeGatewayInformationErrorKind;
use storagegateway::model::NetworkInterface;
use storagegateway::operation::DescribeGatewayInformation;
use storagegateway::output::DescribeGatewayInformationOutput;
use storagegateway::Config;

const GATEWAY_ARN: &str = "arn:aws:storagegateway:us-east-1:111122223333:gateway/sgw-12A3456B";

fn json_response(status: u16, body: &'static str) -> http::Response<Bytes> {
    http::Response::builder()
        .status(status)
        .header("Content-Type", "application/x-amz-json-1.1")
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap()
}

#[test]
fn describe_gateway_information_request() {
    let env = Env::from_slice(&[("AWS_REGION", "us-east-1")]);
    let config = Config::builder()
        .region(EnvironmentProvider::new_with_env(env))
        .build();
    let op = DescribeGatewayInformation::builder()
        .gateway_arn(GATEWAY_ARN)
        .build()
        .make_operation(&config)
        .unwrap();
    let request = op.request().http();
    assert_eq!(
        request.uri(),
        "https://storagegateway.us-east-1.amazonaws.com/"
    );
    assert_ok(validate_headers(
        request,
        &[
            ("Content-Type", "application/x-amz-json-1.1"),
            (
                "X-Amz-Target",
                "StorageGateway_20130630.DescribeGatewayInformation",
            ),
            ("Content-Length", "83"),
        ],
    ));
    assert_ok(validate_body(
        request.body().bytes().unwrap(),
        r#"{"GatewayARN":"arn:aws:storagegateway:us-east-1:111122223333:gateway/sgw-12A3456B"}"#,
        MediaType::Json,
    ));
}

#[test]
fn parse_gateway_information() {
    let output = DescribeGatewayInformation::new()
        .parse(&json_response(
            200,
            r#"{
                "GatewayARN": "arn:aws:storagegateway:us-east-1:111122223333:gateway/sgw-12A3456B",
                "GatewayId": "sgw-AABB1122",
                "GatewayNetworkInterfaces": [
                    {"Ipv4Address": "10.35.69.216", "MacAddress": null},
                    null,
                    {"Ipv6Address": "fe80::1", "LinkSpeed": 1000}
                ],
                "GatewayState": "STATE_RUNNING",
                "GatewayTimezone": "GMT-8:00",
                "Ec2InstanceId": "i-0123",
                "Tags": [{"Key": "team", "Value": "storage"}],
                "GatewayType": "STORED",
                "NextUpdateAvailabilityDate": "2016-01-29"
            }"#,
        ))
        .unwrap();
    assert_eq!(
        output,
        Some(
            DescribeGatewayInformationOutput::builder()
                .gateway_arn(GATEWAY_ARN)
                .gateway_id("sgw-AABB1122")
                .gateway_timezone("GMT-8:00")
                .gateway_state("STATE_RUNNING")
                .gateway_network_interfaces(
                    NetworkInterface::builder().ipv4_address("10.35.69.216").build()
                )
                .gateway_network_interfaces(
                    NetworkInterface::builder().ipv6_address("fe80::1").build()
                )
                .gateway_type("STORED")
                .next_update_availability_date("2016-01-29")
                .build()
        )
    );
}

#[test]
fn parse_empty_interface_list() {
    let output = DescribeGatewayInformation::new()
        .parse(&json_response(200, r#"{"GatewayNetworkInterfaces":[]}"#))
        .unwrap()
        .unwrap();
    assert_eq!(output.gateway_network_interfaces, Some(vec![]));
    assert_eq!(output.gateway_id, None);
}

#[test]
fn parse_errors() {
    let err = DescribeGatewayInformation::new()
        .parse(&json_response(
            400,
            r#"{"__type":"InvalidGatewayRequestException","message":"The specified gateway was not found.","error":{"errorCode":"GatewayNotFound"}}"#,
        ))
        .unwrap_err();
    assert!(err.is_invalid_gateway_request_exception());
    assert_eq!(err.message(), Some("The specified gateway was not found."));

    let response = http::Response::builder()
        .status(500)
        .header("X-Amzn-Errortype", "InternalServerError:http://internal.amazon.com/")
        .header("X-Amzn-Requestid", "a3c5a6e1-request")
        .body(Bytes::from_static(b"{}"))
        .unwrap();
    let err = DescribeGatewayInformation::new()
        .parse(&response)
        .unwrap_err();
    assert!(err.is_internal_server_error());
    assert_eq!(err.request_id(), Some("a3c5a6e1-request"));
    assert_eq!(err.to_string(), "InternalServerError");
}

#[test]
fn non_json_error_body_is_unhandled() {
    let err = DescribeGatewayInformation::new()
        .parse(&json_response(502, "<html>Bad Gateway</html>"))
        .unwrap_err();
    assert!(matches!(
        err.kind,
        DescribeGatewayInformationErrorKind::Unhandled(_)
    ));
    assert_eq!(err.code(), None);
}
