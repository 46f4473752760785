// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::{ConnectorSpec, NameRule, NamespaceRule, PathRule};
use crate::AssetUri;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Closed set of supported connector types, keyed by URI scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connector {
    Redshift,
    Kafka,
    PubSub,
    Adls,
    Wasb,
    AzureServiceBus,
    Mssql,
    Sqlite,
    Teradata,
    Smb,
    Sftp,
    Ftp,
    Oracle,
    Presto,
    Impala,
    Vertica,
    Exasol,
    MongoDb,
    Databricks,
}

impl Connector {
    pub const ALL: &'static [Connector] = &[
        Connector::Redshift,
        Connector::Kafka,
        Connector::PubSub,
        Connector::Adls,
        Connector::Wasb,
        Connector::AzureServiceBus,
        Connector::Mssql,
        Connector::Sqlite,
        Connector::Teradata,
        Connector::Smb,
        Connector::Sftp,
        Connector::Ftp,
        Connector::Oracle,
        Connector::Presto,
        Connector::Impala,
        Connector::Vertica,
        Connector::Exasol,
        Connector::MongoDb,
        Connector::Databricks,
    ];

    pub fn from_scheme(scheme: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.spec().schemes.iter().any(|s| s.eq_ignore_ascii_case(scheme)))
    }

    pub fn resolve(uri: &AssetUri) -> Result<Self, UnsupportedSchemeError> {
        Self::from_scheme(uri.scheme()).ok_or_else(|| UnsupportedSchemeError {
            scheme: uri.scheme().to_string(),
        })
    }

    pub fn spec(&self) -> &'static ConnectorSpec {
        match self {
            Self::Redshift => &REDSHIFT,
            Self::Kafka => &KAFKA,
            Self::PubSub => &PUBSUB,
            Self::Adls => &ADLS,
            Self::Wasb => &WASB,
            Self::AzureServiceBus => &AZURE_SERVICE_BUS,
            Self::Mssql => &MSSQL,
            Self::Sqlite => &SQLITE,
            Self::Teradata => &TERADATA,
            Self::Smb => &SMB,
            Self::Sftp => &SFTP,
            Self::Ftp => &FTP,
            Self::Oracle => &ORACLE,
            Self::Presto => &PRESTO,
            Self::Impala => &IMPALA,
            Self::Vertica => &VERTICA,
            Self::Exasol => &EXASOL,
            Self::MongoDb => &MONGODB,
            Self::Databricks => &DATABRICKS,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported asset URI scheme: {scheme}")]
pub struct UnsupportedSchemeError {
    pub scheme: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Connector table
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const REDSHIFT: ConnectorSpec = ConnectorSpec {
    schemes: &["redshift"],
    default_port: Some(5439),
    requires_authority: true,
    authority_hint: "a host",
    path: PathRule::Exact(3),
    path_hint: "database, schema, and table names",
    namespace: NamespaceRule::Authority,
    name: NameRule::DotJoined,
};

const KAFKA: ConnectorSpec = ConnectorSpec {
    schemes: &["kafka"],
    default_port: None,
    requires_authority: true,
    authority_hint: "a bootstrap server host",
    path: PathRule::NonEmpty,
    path_hint: "a topic name",
    namespace: NamespaceRule::Authority,
    name: NameRule::Path,
};

const PUBSUB: ConnectorSpec = ConnectorSpec {
    schemes: &["pubsub"],
    default_port: None,
    requires_authority: true,
    authority_hint: "a project ID",
    path: PathRule::NonEmpty,
    path_hint: "topics/<topic> or subscriptions/<subscription>",
    namespace: NamespaceRule::Authority,
    name: NameRule::Path,
};

const ADLS: ConnectorSpec = ConnectorSpec {
    schemes: &["abfss", "abfs"],
    default_port: None,
    requires_authority: true,
    authority_hint: "container@account info",
    path: PathRule::Present,
    path_hint: "a path",
    namespace: NamespaceRule::AccountAuthority,
    name: NameRule::Path,
};

const WASB: ConnectorSpec = ConnectorSpec {
    schemes: &["wasbs", "wasb"],
    default_port: None,
    requires_authority: true,
    authority_hint: "container@account info",
    path: PathRule::Present,
    path_hint: "a path",
    namespace: NamespaceRule::AccountAuthority,
    name: NameRule::Path,
};

const AZURE_SERVICE_BUS: ConnectorSpec = ConnectorSpec {
    schemes: &["azservicebus"],
    default_port: None,
    requires_authority: true,
    authority_hint: "a namespace",
    path: PathRule::NonEmpty,
    path_hint: "a queue or topic name",
    namespace: NamespaceRule::Authority,
    name: NameRule::Path,
};

const MSSQL: ConnectorSpec = ConnectorSpec {
    schemes: &["mssql"],
    default_port: Some(1433),
    requires_authority: true,
    authority_hint: "a host",
    path: PathRule::Exact(3),
    path_hint: "database, schema, and table names",
    namespace: NamespaceRule::Authority,
    name: NameRule::DotJoined,
};

const SQLITE: ConnectorSpec = ConnectorSpec {
    schemes: &["sqlite"],
    default_port: None,
    requires_authority: false,
    authority_hint: "",
    path: PathRule::NonEmpty,
    path_hint: "a database path",
    namespace: NamespaceRule::PathPrefix,
    name: NameRule::LastSegment,
};

const TERADATA: ConnectorSpec = ConnectorSpec {
    schemes: &["teradata"],
    default_port: Some(1025),
    requires_authority: true,
    authority_hint: "a host",
    path: PathRule::Exact(2),
    path_hint: "a database and table",
    namespace: NamespaceRule::Authority,
    name: NameRule::DotJoined,
};

const SMB: ConnectorSpec = ConnectorSpec {
    schemes: &["smb"],
    default_port: None,
    requires_authority: true,
    authority_hint: "a host",
    path: PathRule::NonEmpty,
    path_hint: "a share and path",
    namespace: NamespaceRule::Authority,
    name: NameRule::Path,
};

const SFTP: ConnectorSpec = ConnectorSpec {
    schemes: &["sftp"],
    default_port: Some(22),
    requires_authority: true,
    authority_hint: "a host",
    path: PathRule::Any,
    path_hint: "",
    namespace: NamespaceRule::Authority,
    name: NameRule::Path,
};

const FTP: ConnectorSpec = ConnectorSpec {
    schemes: &["ftp"],
    default_port: Some(21),
    requires_authority: true,
    authority_hint: "a host",
    path: PathRule::Any,
    path_hint: "",
    namespace: NamespaceRule::Authority,
    name: NameRule::Path,
};

const ORACLE: ConnectorSpec = ConnectorSpec {
    schemes: &["oracle"],
    default_port: Some(1521),
    requires_authority: true,
    authority_hint: "a host",
    path: PathRule::Exact(3),
    path_hint: "service, schema, and table names",
    namespace: NamespaceRule::Authority,
    name: NameRule::DotJoined,
};

const PRESTO: ConnectorSpec = ConnectorSpec {
    schemes: &["presto"],
    default_port: Some(8080),
    requires_authority: true,
    authority_hint: "a host",
    path: PathRule::Exact(3),
    path_hint: "a catalog, schema, and table",
    namespace: NamespaceRule::Authority,
    name: NameRule::DotJoined,
};

const IMPALA: ConnectorSpec = ConnectorSpec {
    schemes: &["impala"],
    default_port: Some(21050),
    requires_authority: true,
    authority_hint: "a host",
    path: PathRule::Exact(2),
    path_hint: "a database and table",
    namespace: NamespaceRule::Authority,
    name: NameRule::DotJoined,
};

const VERTICA: ConnectorSpec = ConnectorSpec {
    schemes: &["vertica"],
    default_port: Some(5433),
    requires_authority: true,
    authority_hint: "a host",
    path: PathRule::Exact(3),
    path_hint: "a database, schema, and table",
    namespace: NamespaceRule::Authority,
    name: NameRule::DotJoined,
};

const EXASOL: ConnectorSpec = ConnectorSpec {
    schemes: &["exasol"],
    default_port: Some(8563),
    requires_authority: true,
    authority_hint: "a host",
    path: PathRule::Exact(2),
    path_hint: "a schema and table",
    namespace: NamespaceRule::Authority,
    name: NameRule::DotJoined,
};

const MONGODB: ConnectorSpec = ConnectorSpec {
    schemes: &["mongodb"],
    default_port: Some(27017),
    requires_authority: true,
    authority_hint: "a host",
    path: PathRule::Exact(2),
    path_hint: "a database and collection",
    namespace: NamespaceRule::Authority,
    name: NameRule::DotJoined,
};

const DATABRICKS: ConnectorSpec = ConnectorSpec {
    schemes: &["databricks"],
    default_port: None,
    requires_authority: true,
    authority_hint: "a host",
    path: PathRule::Exact(3),
    path_hint: "catalog, schema, and table names",
    namespace: NamespaceRule::Authority,
    name: NameRule::DotJoined,
};
