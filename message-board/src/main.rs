// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Terminal view for the message-board dApp.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use message_board::{get_board, Operation};
use stacks_client::{
    session, Connection, DemoSigner, Network, Poller, ReadClient, Session, StatusLine,
    SubmitOutcome, POLL_INTERVAL, POST_SUBMIT_DELAY,
};

#[derive(Parser)]
#[command(name = "message_board_app", about = "Simple Message Board dApp")]
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
        println!("message: connect wallet to view");
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
        let function = operation.function_name();
        self.status.info(format!("Calling {}...", function));
        let intent = operation.into_intent(self.connection.network);
        match self.connection.submit(&self.signer, intent).await {
            Ok(SubmitOutcome::Submitted { txid }) => {
                self.status.success(format!(
                    "Transaction submitted! {} accepted as {}.",
                    function, txid
                ));
                let client = self.client.clone();
                let network = self.connection.network;
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
    match get_board(client, network).await {
        Ok((message, owner)) => println!(
            "message: {:?} (owner: {})",
            message,
            owner.as_deref().unwrap_or("none")
        ),
        Err(err) => println!("message: error ({})", err),
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
        println!("message: connect wallet to view");
    }

    println!("commands: connect | disconnect | network <name> | refresh | set <text> | clear | quit");
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
            "clear" => app.call(Operation::ClearMessage).await,
            "quit" | "exit" => break,
            other => {
                if let Some(text) = other.strip_prefix("set ") {
                    match Operation::set_message(text) {
                        Ok(operation) => app.call(operation).await,
                        Err(err) => app.status.error(err.to_string()),
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
