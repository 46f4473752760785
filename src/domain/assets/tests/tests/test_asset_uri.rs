// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use dataline_assets::*;
use pretty_assertions::{assert_eq, assert_ne};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_parse_network_uri() {
    let uri: AssetUri = "redshift://cluster.us-east-1:5439/mydb/public/users"
        .parse()
        .unwrap();

    assert_eq!(uri.scheme(), "redshift");
    assert_eq!(uri.authority(), Some("cluster.us-east-1:5439"));
    assert_eq!(uri.host(), Some("cluster.us-east-1"));
    assert_eq!(uri.port_token(), Some("5439"));
    assert_eq!(uri.port(), Ok(Some(5439)));
    assert_eq!(uri.path(), "/mydb/public/users");
    assert_eq!(uri.path_segments(), vec!["mydb", "public", "users"]);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_parse_authority_less_uri() {
    let uri: AssetUri = "sqlite:///path/to/my.db/mytable".parse().unwrap();

    assert_eq!(uri.scheme(), "sqlite");
    assert_eq!(uri.authority(), None);
    assert_eq!(uri.host(), None);
    assert_eq!(uri.port(), Ok(None));
    assert_eq!(uri.path(), "/path/to/my.db/mytable");
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_parse_credential_authority() {
    let uri: AssetUri = "abfss://mycontainer@myaccount.dfs.core.windows.net/data/file.csv"
        .parse()
        .unwrap();

    assert_eq!(
        uri.authority(),
        Some("mycontainer@myaccount.dfs.core.windows.net")
    );
    assert_eq!(uri.host(), Some("myaccount.dfs.core.windows.net"));
    assert_eq!(uri.port(), Ok(None));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_scheme_is_lowercased_authority_is_not() {
    let uri: AssetUri = "REDSHIFT://Cluster.US-East-1/db/schema/table".parse().unwrap();

    assert_eq!(uri.scheme(), "redshift");
    assert_eq!(uri.authority(), Some("Cluster.US-East-1"));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_port_edge_cases() {
    let uri: AssetUri = "mssql://host:/db/schema/table".parse().unwrap();
    assert_eq!(uri.port_token(), None);
    assert_eq!(uri.port(), Ok(None));

    let uri: AssetUri = "mssql://host:abcd/db/schema/table".parse().unwrap();
    assert_eq!(uri.port_token(), Some("abcd"));
    assert_eq!(
        uri.port(),
        Err(InvalidPortError {
            token: "abcd".to_string()
        })
    );
    assert_eq!(
        uri.port().unwrap_err().to_string(),
        "Port could not be cast to integer value as 'abcd'"
    );

    let uri: AssetUri = "mssql://[::1]:1433/db/schema/table".parse().unwrap();
    assert_eq!(uri.host(), Some("[::1]"));
    assert_eq!(uri.port(), Ok(Some(1433)));

    let uri: AssetUri = "mssql://[::1]/db/schema/table".parse().unwrap();
    assert_eq!(uri.host(), Some("[::1]"));
    assert_eq!(uri.port(), Ok(None));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_path_segments() {
    let uri: AssetUri = "kafka://broker1:9092/my-topic".parse().unwrap();
    assert_eq!(uri.path_segments(), vec!["my-topic"]);

    let uri: AssetUri = "kafka://broker1:9092".parse().unwrap();
    assert!(uri.path_segments().is_empty());
    assert!(uri.is_path_empty_or_root());

    let uri: AssetUri = "kafka://broker1:9092/".parse().unwrap();
    assert!(uri.path_segments().is_empty());
    assert!(uri.is_path_empty_or_root());

    // Trailing separators count as empty segments
    let uri: AssetUri = "mssql://host/db/schema/".parse().unwrap();
    assert_eq!(uri.path_segments(), vec!["db", "schema", ""]);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_display_round_trip() {
    for value in [
        "redshift://cluster.us-east-1:5439/mydb/public/users",
        "kafka://broker1:9092/my-topic",
        "abfss://mycontainer@myaccount.dfs.core.windows.net/data/file.csv",
        "sqlite:///path/to/my.db/mytable",
        "smb://myhost/myshare/path/to/file",
        "pubsub://my-project/topics/my-topic",
    ] {
        let uri: AssetUri = value.parse().unwrap();
        assert_eq!(uri.to_string(), value);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_parse_invalid() {
    for value in ["", "no-scheme", "9redshift://host/db", "redshift:/db", "redshift"] {
        assert_eq!(
            value.parse::<AssetUri>(),
            Err(ParseAssetUriError {
                value: value.to_string()
            }),
        );
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_from_url() {
    let url = url::Url::parse("redshift://cluster.us-east-1:5439/mydb/public/users").unwrap();
    let uri = AssetUri::from(&url);

    assert_eq!(
        uri,
        "redshift://cluster.us-east-1:5439/mydb/public/users"
            .parse()
            .unwrap()
    );

    let url =
        url::Url::parse("abfss://mycontainer@myaccount.dfs.core.windows.net/data/file.csv").unwrap();
    let uri = AssetUri::from(&url);

    assert_eq!(
        uri.authority(),
        Some("mycontainer@myaccount.dfs.core.windows.net")
    );
    assert_eq!(uri.path(), "/data/file.csv");
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_from_url_normalizes_like_sanitizer() {
    // The generic parser elides the well-known port and lowercases the host;
    // sanitation puts the port back
    let url = url::Url::parse("ftp://EXAMPLE.com:21/data/file.csv").unwrap();
    let uri = AssetUri::from(&url);
    assert_eq!(uri.to_string(), "ftp://example.com/data/file.csv");

    let sanitized = sanitize_uri(&uri).unwrap();
    assert_eq!(sanitized.to_string(), "ftp://example.com:21/data/file.csv");
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_serde() {
    let uri: AssetUri = "kafka://broker1:9092/my-topic".parse().unwrap();

    let json = serde_json::to_string(&uri).unwrap();
    assert_eq!(json, r#""kafka://broker1:9092/my-topic""#);
    assert_eq!(serde_json::from_str::<AssetUri>(&json).unwrap(), uri);

    assert!(serde_json::from_str::<AssetUri>(r#""no-scheme""#).is_err());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_asset_equality() {
    let a = Asset::new("kafka://broker1:9092/my-topic");
    let b = Asset::new("kafka://broker1:9092/my-topic");
    assert_eq!(a, b);

    let mut extra = AssetExtra::new();
    extra.insert("group".to_string(), serde_json::json!("analytics"));
    let c = Asset::new("kafka://broker1:9092/my-topic").with_extra(extra.clone());
    assert_ne!(a, c);

    let d = Asset::new("kafka://broker1:9092/my-topic").with_extra(extra);
    assert_eq!(c, d);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_asset_serde() {
    let asset = Asset::new("kafka://broker1:9092/my-topic");
    assert_eq!(
        serde_json::to_string(&asset).unwrap(),
        r#"{"uri":"kafka://broker1:9092/my-topic"}"#
    );

    let mut extra = AssetExtra::new();
    extra.insert("owner".to_string(), serde_json::json!("ingest-team"));
    let asset = asset.with_extra(extra);

    let json = serde_json::to_string(&asset).unwrap();
    assert_eq!(
        json,
        r#"{"uri":"kafka://broker1:9092/my-topic","extra":{"owner":"ingest-team"}}"#
    );
    assert_eq!(serde_json::from_str::<Asset>(&json).unwrap(), asset);
}
