// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::{Asset, AssetFields};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Builds an asset with the connector's canonical URI.
///
/// Construction is infallible: the template encodes all the validation
/// there is. Field presence is enforced by the [`AssetFields`] signature,
/// not by runtime checks.
pub fn create_asset(fields: AssetFields<'_>) -> Asset {
    Asset::new(fields.canonical_uri())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl AssetFields<'_> {
    /// Renders the connector's URI template
    pub fn canonical_uri(&self) -> String {
        let default_port = self.connector().spec().default_port;

        match *self {
            Self::Redshift {
                host,
                port,
                database,
                schema,
                table,
            } => {
                let authority = host_port(host, port.or(default_port));
                format!("redshift://{authority}/{database}/{schema}/{table}")
            }
            Self::Kafka { server, topic } => format!("kafka://{server}/{topic}"),
            Self::PubSub { project_id, topic } => format!("pubsub://{project_id}/topics/{topic}"),
            Self::Adls {
                scheme,
                container,
                account,
                path,
            } => format!(
                "{}://{container}@{account}.dfs.core.windows.net{path}",
                scheme.as_str()
            ),
            Self::Wasb {
                scheme,
                container,
                account,
                path,
            } => format!(
                "{}://{container}@{account}.blob.core.windows.net{path}",
                scheme.as_str()
            ),
            Self::AzureServiceBus {
                namespace,
                queue_or_topic,
            } => format!("azservicebus://{namespace}/{queue_or_topic}"),
            Self::Mssql {
                host,
                port,
                database,
                schema,
                table,
            } => {
                let authority = host_port(host, port.or(default_port));
                format!("mssql://{authority}/{database}/{schema}/{table}")
            }
            Self::Sqlite { path, table } => match table {
                Some(table) => format!("sqlite:///{path}/{table}"),
                None => format!("sqlite:///{path}/"),
            },
            Self::Teradata {
                host,
                port,
                database,
                table,
            } => {
                let authority = host_port(host, port.or(default_port));
                format!("teradata://{authority}/{database}/{table}")
            }
            Self::Smb {
                host,
                port,
                share,
                path,
            } => {
                let authority = host_port(host, port);
                format!("smb://{authority}/{share}{}", path.unwrap_or("/"))
            }
            Self::Sftp { host, port, path } => {
                let authority = host_port(host, port.or(default_port));
                format!("sftp://{authority}{path}")
            }
            Self::Ftp { host, port, path } => {
                let authority = host_port(host, port.or(default_port));
                format!("ftp://{authority}{path}")
            }
            Self::Oracle {
                host,
                port,
                service_name,
                schema,
                table,
            } => {
                let authority = host_port(host, port.or(default_port));
                format!("oracle://{authority}/{service_name}/{schema}/{table}")
            }
            Self::Presto {
                host,
                port,
                catalog,
                schema,
                table,
            } => {
                let authority = host_port(host, port.or(default_port));
                format!("presto://{authority}/{catalog}/{schema}/{table}")
            }
            Self::Impala {
                host,
                port,
                database,
                table,
            } => {
                let authority = host_port(host, port.or(default_port));
                format!("impala://{authority}/{database}/{table}")
            }
            Self::Vertica {
                host,
                port,
                database,
                schema,
                table,
            } => {
                let authority = host_port(host, port.or(default_port));
                format!("vertica://{authority}/{database}/{schema}/{table}")
            }
            Self::Exasol {
                host,
                port,
                schema,
                table,
            } => {
                let authority = host_port(host, port.or(default_port));
                format!("exasol://{authority}/{schema}/{table}")
            }
            Self::MongoDb {
                host,
                port,
                database,
                collection,
            } => {
                let authority = host_port(host, port.or(default_port));
                format!("mongodb://{authority}/{database}/{collection}")
            }
            Self::Databricks {
                host,
                catalog,
                schema,
                table,
            } => format!("databricks://{host}/{catalog}/{schema}/{table}"),
        }
    }
}

fn host_port(host: &str, port: Option<u16>) -> String {
    match port {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}
