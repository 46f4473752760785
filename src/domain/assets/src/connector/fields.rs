// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::Connector;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Typed construction fields, one variant per connector.
///
/// Field values are substituted into the connector's URI template verbatim:
/// embedded `/`, `@`, or `.` characters are not escaped and will corrupt the
/// URI shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetFields<'a> {
    Redshift {
        host: &'a str,
        port: Option<u16>,
        database: &'a str,
        schema: &'a str,
        table: &'a str,
    },
    Kafka {
        /// Bootstrap server, passed through verbatim and may embed a port
        server: &'a str,
        topic: &'a str,
    },
    PubSub {
        project_id: &'a str,
        topic: &'a str,
    },
    Adls {
        scheme: AdlsScheme,
        container: &'a str,
        account: &'a str,
        path: &'a str,
    },
    Wasb {
        scheme: WasbScheme,
        container: &'a str,
        account: &'a str,
        path: &'a str,
    },
    AzureServiceBus {
        namespace: &'a str,
        queue_or_topic: &'a str,
    },
    Mssql {
        host: &'a str,
        port: Option<u16>,
        database: &'a str,
        schema: &'a str,
        table: &'a str,
    },
    Sqlite {
        path: &'a str,
        /// Absent table yields a trailing-slash URI naming the database
        /// directory itself
        table: Option<&'a str>,
    },
    Teradata {
        host: &'a str,
        port: Option<u16>,
        database: &'a str,
        table: &'a str,
    },
    Smb {
        host: &'a str,
        /// Omitted from the URI entirely when unset
        port: Option<u16>,
        share: &'a str,
        /// Defaults to `/`
        path: Option<&'a str>,
    },
    Sftp {
        host: &'a str,
        port: Option<u16>,
        path: &'a str,
    },
    Ftp {
        host: &'a str,
        port: Option<u16>,
        path: &'a str,
    },
    Oracle {
        host: &'a str,
        port: Option<u16>,
        service_name: &'a str,
        schema: &'a str,
        table: &'a str,
    },
    Presto {
        host: &'a str,
        port: Option<u16>,
        catalog: &'a str,
        schema: &'a str,
        table: &'a str,
    },
    Impala {
        host: &'a str,
        port: Option<u16>,
        database: &'a str,
        table: &'a str,
    },
    Vertica {
        host: &'a str,
        port: Option<u16>,
        database: &'a str,
        schema: &'a str,
        table: &'a str,
    },
    Exasol {
        host: &'a str,
        port: Option<u16>,
        schema: &'a str,
        table: &'a str,
    },
    MongoDb {
        host: &'a str,
        port: Option<u16>,
        database: &'a str,
        collection: &'a str,
    },
    Databricks {
        host: &'a str,
        catalog: &'a str,
        schema: &'a str,
        table: &'a str,
    },
}

impl AssetFields<'_> {
    pub fn connector(&self) -> Connector {
        match self {
            Self::Redshift { .. } => Connector::Redshift,
            Self::Kafka { .. } => Connector::Kafka,
            Self::PubSub { .. } => Connector::PubSub,
            Self::Adls { .. } => Connector::Adls,
            Self::Wasb { .. } => Connector::Wasb,
            Self::AzureServiceBus { .. } => Connector::AzureServiceBus,
            Self::Mssql { .. } => Connector::Mssql,
            Self::Sqlite { .. } => Connector::Sqlite,
            Self::Teradata { .. } => Connector::Teradata,
            Self::Smb { .. } => Connector::Smb,
            Self::Sftp { .. } => Connector::Sftp,
            Self::Ftp { .. } => Connector::Ftp,
            Self::Oracle { .. } => Connector::Oracle,
            Self::Presto { .. } => Connector::Presto,
            Self::Impala { .. } => Connector::Impala,
            Self::Vertica { .. } => Connector::Vertica,
            Self::Exasol { .. } => Connector::Exasol,
            Self::MongoDb { .. } => Connector::MongoDb,
            Self::Databricks { .. } => Connector::Databricks,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Data Lake Storage scheme variant
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AdlsScheme {
    #[default]
    Abfss,
    Abfs,
}

impl AdlsScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abfss => "abfss",
            Self::Abfs => "abfs",
        }
    }
}

/// Blob Storage scheme variant
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WasbScheme {
    #[default]
    Wasbs,
    Wasb,
}

impl WasbScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wasbs => "wasbs",
            Self::Wasb => "wasb",
        }
    }
}
