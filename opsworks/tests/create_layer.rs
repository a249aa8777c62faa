/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use opsworks::error::CreateLayerErrorKind;
use opsworks::input::CreateLayerInput;
use opsworks::model::{
    LayerType, LifecycleEventConfiguration, Recipes, ShutdownEventConfiguration,
    VolumeConfiguration,
};
use opsworks::operation::CreateLayer;
use opsworks::output::CreateLayerOutput;
use opsworks::{Config, Endpoint, Region};
use pretty_assertions::assert_eq;
use protocol_test_helpers::{assert_ok, validate_body, validate_headers, MediaType};
use smithy_http::operation::BuildError;
use smithy_http::response::ParseStrictResponse;

fn config() -> Config {
    Config::builder().region(Region::new("us-east-1")).build()
}

fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
    http::Response::builder()
        .status(status)
        .header("x-amzn-requestid", "8a2f5c4e-request")
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap()
}

#[test]
fn create_layer_request() {
    let input = CreateLayer::builder()
        .stack_id("f6673d70-32e6-4425-8999-265dd002fec7")
        .r#type(LayerType::PhpApp)
        .name("PHP App Server")
        .shortname("php-app")
        .attributes("MemcachedMemory", "512")
        .attributes("BundlerVersion", "1.17.3")
        .custom_security_group_ids("sg-0123")
        .set_packages(Some(vec![]))
        .volume_configurations(
            VolumeConfiguration::builder()
                .mount_point("/data")
                .number_of_disks(2)
                .size(100)
                .build(),
        )
        .enable_auto_healing(true)
        .custom_recipes(Recipes::builder().setup("phpapp::appsetup").build())
        .lifecycle_event_configuration(
            LifecycleEventConfiguration::builder()
                .shutdown(
                    ShutdownEventConfiguration::builder()
                        .execution_timeout(120)
                        .delay_until_elb_connections_drained(true)
                        .build(),
                )
                .build(),
        )
        .build();
    let op = input.make_operation(&config()).expect("valid operation");
    let request = op.request().http();
    let body = std::str::from_utf8(request.body().bytes().unwrap()).unwrap();

    assert_eq!(request.method(), "POST");
    assert_eq!(request.uri(), "https://opsworks.us-east-1.amazonaws.com/");
    let content_length = body.len().to_string();
    assert_ok(validate_headers(
        request,
        &[
            ("Content-Type", "application/x-amz-json-1.1"),
            ("X-Amz-Target", "OpsWorks_20130218.CreateLayer"),
            ("Content-Length", content_length.as_str()),
        ],
    ));
    // members are written in declaration order and map keys are sorted
    assert_eq!(
        body,
        r#"{"StackId":"f6673d70-32e6-4425-8999-265dd002fec7","Type":"php-app","Name":"PHP App Server","Shortname":"php-app","Attributes":{"BundlerVersion":"1.17.3","MemcachedMemory":"512"},"CustomSecurityGroupIds":["sg-0123"],"VolumeConfigurations":[{"MountPoint":"/data","NumberOfDisks":2,"Size":100}],"EnableAutoHealing":true,"CustomRecipes":{"Setup":["phpapp::appsetup"]},"LifecycleEventConfiguration":{"Shutdown":{"ExecutionTimeout":120,"DelayUntilElbConnectionsDrained":true}}}"#
    );
    assert_eq!(op.metadata().map(|m| m.name()), Some("CreateLayer"));
    assert_eq!(op.metadata().map(|m| m.service()), Some("opsworks"));
}

#[test]
fn empty_input_serializes_empty_object() {
    let request = CreateLayer::marshall(Some(&CreateLayerInput::builder().build()))
        .unwrap()
        .into_parts();
    assert_ok(validate_body(
        request.body().bytes().unwrap(),
        "{}",
        MediaType::Json,
    ));
    assert_eq!(request.headers()["Content-Length"], "2");
}

#[test]
fn missing_input_is_rejected() {
    let err = CreateLayer::marshall(None).expect_err("no input");
    assert!(matches!(err, BuildError::MissingField { field: "input", .. }));
}

#[test]
fn endpoint_override() {
    let config = Config::builder()
        .endpoint_resolver(Endpoint::from_str("http://localhost:8000").unwrap())
        .build();
    let op = CreateLayer::builder()
        .stack_id("stack")
        .build()
        .make_operation(&config)
        .unwrap();
    assert_eq!(op.request().http().uri(), "http://localhost:8000/");
}

#[test]
fn missing_region_fails_to_build() {
    let config = Config::builder().build();
    let err = CreateLayer::builder()
        .build()
        .make_operation(&config)
        .expect_err("no region");
    assert!(matches!(err, BuildError::Other(_)));
}

#[test]
fn parse_success_skips_unknown_members() {
    let parsed = CreateLayer::new()
        .parse(&response(
            200,
            r#"{"Unmodeled":{"Nested":[1,{"Deeper":null}]},"LayerId":"e5ef3e16-4c5c-4a7a-9b1e-1d2f3c4b5a69"}"#,
        ))
        .expect("success");
    assert_eq!(
        parsed,
        Some(
            CreateLayerOutput::builder()
                .layer_id("e5ef3e16-4c5c-4a7a-9b1e-1d2f3c4b5a69")
                .build()
        )
    );
}

#[test]
fn parse_skips_deeply_nested_unknown_member() {
    let depth = 200_000;
    let body = format!(
        r#"{{"Unmodeled":{}{},"LayerId":"layer-1"}}"#,
        "[".repeat(depth),
        "]".repeat(depth)
    );
    let response = http::Response::builder()
        .status(200)
        .body(Bytes::from(body))
        .unwrap();
    let parsed = CreateLayer::new().parse(&response).expect("success");
    assert_eq!(
        parsed,
        Some(CreateLayerOutput::builder().layer_id("layer-1").build())
    );
}

#[test]
fn parse_null_and_empty_bodies() {
    assert_eq!(CreateLayer::new().parse(&response(200, "null")).unwrap(), None);
    assert_eq!(
        CreateLayer::new().parse(&response(200, "")).unwrap(),
        Some(CreateLayerOutput::builder().build())
    );
}

#[test]
fn parse_modeled_error() {
    let err = CreateLayer::new()
        .parse(&response(
            400,
            r#"{"__type":"com.amazonaws.opsworks#ValidationException","message":"Shortname is invalid"}"#,
        ))
        .expect_err("modeled error");
    assert!(err.is_validation_exception());
    assert_eq!(err.code(), Some("ValidationException"));
    assert_eq!(err.message(), Some("Shortname is invalid"));
    assert_eq!(err.request_id(), Some("8a2f5c4e-request"));
    assert_eq!(err.to_string(), "ValidationException: Shortname is invalid");

    let err = CreateLayer::new()
        .parse(&response(400, r#"{"__type":"ResourceNotFoundException"}"#))
        .unwrap_err();
    assert!(err.is_resource_not_found_exception());
}

#[test]
fn parse_unknown_error_is_unhandled() {
    let err = CreateLayer::new()
        .parse(&response(
            500,
            r#"{"__type":"InternalFailure","message":"try again"}"#,
        ))
        .unwrap_err();
    assert!(matches!(err.kind, CreateLayerErrorKind::Unhandled(_)));
    assert_eq!(err.code(), Some("InternalFailure"));
    assert_eq!(err.message(), Some("try again"));
}

#[test]
fn malformed_success_body_is_unhandled() {
    let err = CreateLayer::new()
        .parse(&response(200, r#"{"LayerId":"#))
        .unwrap_err();
    assert!(matches!(err.kind, CreateLayerErrorKind::Unhandled(_)));
    assert_eq!(err.code(), None);
}
