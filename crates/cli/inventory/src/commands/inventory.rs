use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use colored::*;
use sn_chain::{fetch_all_owned_objects, Address, OwnedObjectsFetcher, PaginationOptions};
use sn_types::{categorize_objects, Network};
use sn_utils_cli::{
    absolute_path, inventory_log_path, iso_timestamp, write_json_log, ChainArgs, CliCommand,
    InventorySnapshot, DEFAULT_LOGS_DIR,
};

use crate::summary::print_summary;

#[derive(clap::Parser, Debug, Clone)]
#[command(name = "sn-admin-objects")]
#[command(about = "Save every object owned by the admin address, grouped by kind")]
pub struct InventoryCmd {
    /// Network to query
    #[arg(long, default_value_t = Network::Testnet)]
    pub network: Network,

    /// Output JSON file (default: logs/admin-objects-<network>-<timestamp>.json)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Objects requested per page
    #[arg(long, default_value_t = sn_chain::DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Stop with an error after this many pages
    #[arg(long)]
    pub max_pages: Option<usize>,

    #[command(flatten)]
    pub chain: ChainArgs,
}

impl InventoryCmd {
    pub fn pagination(&self) -> PaginationOptions {
        PaginationOptions {
            page_size: self.page_size,
            max_pages: self.max_pages,
        }
    }

    pub fn output_path(&self, now: DateTime<Utc>) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| inventory_log_path(Path::new(DEFAULT_LOGS_DIR), self.network, now))
    }

    /// Fetches and categorizes the admin's objects, then writes the snapshot.
    ///
    /// The returned path is absolute.
    pub async fn save_snapshot<F>(
        &self,
        fetcher: &F,
        admin: &Address,
        now: DateTime<Utc>,
    ) -> anyhow::Result<(InventorySnapshot, PathBuf)>
    where
        F: OwnedObjectsFetcher + ?Sized,
    {
        let objects = fetch_all_owned_objects(fetcher, admin, self.pagination())
            .await
            .context("Failed to fetch admin objects")?;
        println!("{} Found {} objects", "✅".green(), objects.len());

        let snapshot = InventorySnapshot {
            timestamp: iso_timestamp(now),
            network: self.network,
            admin_address: admin.to_string(),
            objects: categorize_objects(&objects),
        };

        let output = absolute_path(&self.output_path(now));
        write_json_log(&output, &snapshot)?;

        Ok((snapshot, output))
    }
}

#[async_trait::async_trait]
impl CliCommand for InventoryCmd {
    async fn call(&self) -> anyhow::Result<()> {
        let admin = self.chain.keypair()?.address();
        println!("🔍 Querying objects for admin: {}", admin.to_string().bright_white());
        println!("🌐 Network: {}", self.network);

        let client = self.chain.client(self.network);
        println!("{}", "⏳ Fetching objects...".bright_yellow());

        let (snapshot, output) = self.save_snapshot(&client, &admin, Utc::now()).await?;
        println!("💾 Saved to: {}", output.display());

        print_summary(&snapshot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let cmd = InventoryCmd::try_parse_from(["sn-admin-objects"]).unwrap();
        assert_eq!(cmd.network, Network::Testnet);
        assert_eq!(cmd.pagination(), PaginationOptions::default());
        assert!(cmd.output.is_none());

        let now = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(
            cmd.output_path(now),
            PathBuf::from("logs/admin-objects-testnet-2025-01-02T03-04-05-000Z.json")
        );
    }

    #[test]
    fn test_flags() {
        let cmd = InventoryCmd::try_parse_from([
            "sn-admin-objects",
            "--network",
            "Mainnet",
            "--output",
            "out.json",
            "--page-size",
            "10",
            "--max-pages",
            "3",
        ])
        .unwrap();
        assert_eq!(cmd.network, Network::Mainnet);
        assert_eq!(cmd.output_path(Utc::now()), PathBuf::from("out.json"));
        assert_eq!(
            cmd.pagination(),
            PaginationOptions {
                page_size: 10,
                max_pages: Some(3)
            }
        );
    }

    #[test]
    fn test_unknown_network_is_rejected() {
        assert!(InventoryCmd::try_parse_from(["sn-admin-objects", "--network", "moonnet"]).is_err());
    }
}
