// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Terminal view for the NFT dApp: shows the last minted token id, mints to
//! the connected address, and transfers tokens to a typed recipient.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use nft::{get_last_token_id, Operation};
use stacks_client::{
    session, Connection, DemoSigner, Network, Poller, ReadClient, Session, StatusLine,
    SubmitOutcome, POLL_INTERVAL, POST_SUBMIT_DELAY,
};

#[derive(Parser)]
#[command(name = "nft_app", about = "Simple NFT dApp")]
struct Args {
    /// Network to run against: mainnet, testnet, or devnet.
    #[arg(long, default_value = "testnet")]
    network: String,
    /// Path of the persisted wallet session.
    #[arg(long)]
    session_file: Option<PathBuf>,
}

struct App {
    client: ReadClient,
    connection: Connection,
    signer: DemoSigner,
    status: StatusLine,
    session_path: PathBuf,
    poller: Option<Poller>,
}

impl App {
    fn new(network: Network, session_path: PathBuf) -> Self {
        App {
            client: ReadClient::new(),
            connection: Connection::new(network),
            signer: DemoSigner::default(),
            status: StatusLine::new(),
            session_path,
            poller: None,
        }
    }

    fn start_polling(&mut self) {
        let client = self.client.clone();
        let network = self.connection.network;
        // Replacing the poller cancels any prior timer first.
        self.poller = Some(Poller::start(POLL_INTERVAL, move || {
            let client = client.clone();
            async move { render(&client, network).await }
        }));
    }

    fn stop_polling(&mut self) {
        self.poller = None;
    }

    fn connect(&mut self) {
        if self.connection.is_connected() {
            self.status.info("Wallet already connected");
            return;
        }
        let session = Session::demo();
        if let Err(err) = session::save_session(&self.session_path, &session) {
            self.status.error(format!("Error saving session: {}", err));
        }
        self.connection.connect(session);
        self.status.success("Wallet connected successfully!");
        self.start_polling();
    }

    fn disconnect(&mut self) {
        self.stop_polling();
        self.connection.disconnect();
        if let Err(err) = session::clear_session(&self.session_path) {
            self.status.error(format!("Error clearing session: {}", err));
        }
        self.status.info("Wallet disconnected");
        println!("last token id: connect wallet to view");
    }

    fn set_network(&mut self, network: Network) {
        self.connection.network = network;
        self.status.info(format!("Network set to {}", network));
        if self.connection.is_connected() {
            self.start_polling();
        }
    }

    async fn call(&self, operation: Operation) {
        if !self.connection.is_connected() {
            self.status.error("Please connect your wallet first");
            return;
        }
        self.status
            .info(format!("Calling {}...", operation.function_name()));
        let function = operation.function_name();
        let intent = operation.into_intent(self.connection.network);
        match self.connection.submit(&self.signer, intent).await {
            Ok(SubmitOutcome::Submitted { txid }) => {
                self.status.success(format!(
                    "Transaction submitted! {} accepted as {}.",
                    function, txid
                ));
                let client = self.client.clone();
                let network = self.connection.network;
                // Best-effort re-read; the ledger may not have confirmed yet.
                tokio::spawn(async move {
                    tokio::time::sleep(POST_SUBMIT_DELAY).await;
                    render(&client, network).await;
                });
            }
            Ok(SubmitOutcome::Cancelled) => self.status.error("Transaction cancelled"),
            Err(err) => self.status.error(format!("Error: {}", err)),
        }
    }
}

async fn render(client: &ReadClient, network: Network) {
    match get_last_token_id(client, network).await {
        Ok(id) => println!("last token id: {}", id),
        Err(err) => println!("last token id: error ({})", err),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let network: Network = args.network.parse()?;
    let session_path = args
        .session_file
        .unwrap_or_else(session::default_session_path);
    let mut app = App::new(network, session_path);

    if let Some(stored) = session::load_session(&app.session_path) {
        app.connection.connect(stored);
        app.start_polling();
    } else {
        println!("last token id: connect wallet to view");
    }

    println!("commands: connect | disconnect | network <name> | refresh | mint | transfer <token-id> <recipient> | quit");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "" => {}
            "connect" => app.connect(),
            "disconnect" => app.disconnect(),
            "refresh" => {
                if app.connection.is_connected() {
                    render(&app.client, app.connection.network).await;
                } else {
                    app.status.error("Please connect your wallet first");
                }
            }
            "mint" => match app.connection.current_address().map(str::to_string) {
                Some(address) => match Operation::mint_next(&address) {
                    Ok(operation) => app.call(operation).await,
                    Err(err) => app.status.error(err.to_string()),
                },
                None => app.status.error("Please connect your wallet first"),
            },
            "quit" | "exit" => break,
            other => {
                if let Some(rest) = other.strip_prefix("transfer ") {
                    let mut parts = rest.split_whitespace();
                    match (parts.next(), parts.next()) {
                        (Some(token_id), Some(recipient)) => {
                            match Operation::transfer(token_id, recipient) {
                                Ok(operation) => app.call(operation).await,
                                Err(err) => app.status.error(err.to_string()),
                            }
                        }
                        _ => app.status.error("usage: transfer <token-id> <recipient>"),
                    }
                } else if let Some(name) = other.strip_prefix("network ") {
                    match name.parse::<Network>() {
                        Ok(network) => app.set_network(network),
                        Err(err) => app.status.error(err.to_string()),
                    }
                } else {
                    app.status.error(format!("unknown command: {}", other));
                }
            }
        }
    }

    app.stop_polling();
    Ok(())
}
