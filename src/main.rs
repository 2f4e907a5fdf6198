//! asmsubmit - Assembler Service Client
//!
//! アセンブリソースとoptabを2パスアセンブラサービスに送信

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use asmsubmit::adapter::config::Config;
use asmsubmit::driver::{Args, AssembleWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration, CLI flags win over the file
    let config = Config::load(&args.config)?.into_client_config(args.endpoint.clone(), args.view);

    // Create workflow with injected dependencies
    let workflow = AssembleWorkflow::new(config);

    workflow.execute(args).await
}
