use std::io::{self, BufRead, Write};

use anyhow::Result;
use chrono::Utc;
use clap::Parser;

use crate::application::{AppError, Statement, TellerService};
use crate::domain::{format_cents, parse_cents, Cents, TransactionKind};

/// Teller - interactive banking menu
#[derive(Parser)]
#[command(name = "teller")]
#[command(about = "An in-memory bank teller ledger for the command line")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

type Input = io::Lines<io::StdinLock<'static>>;

impl Cli {
    /// Run the menu loop until the operator exits or stdin closes. Every
    /// action error is reported and control returns to the menu; only real
    /// I/O failures propagate.
    pub fn run(self) -> Result<()> {
        let mut input = io::stdin().lock().lines();
        let mut service = TellerService::new();

        loop {
            print_menu();
            let Some(choice) = prompt(&mut input, "Choose an option")? else {
                break;
            };

            match choice.trim() {
                "1" => create_customer(&mut service, &mut input)?,
                "2" => open_account(&mut service, &mut input)?,
                "3" => deposit(&mut service, &mut input)?,
                "4" => withdraw(&mut service, &mut input)?,
                "5" => statement(&service, &mut input)?,
                "6" => list_accounts(&service),
                "7" => {
                    println!("Goodbye.");
                    break;
                }
                _ => println!("Invalid option."),
            }
        }

        Ok(())
    }
}

fn print_menu() {
    println!();
    println!("=== MENU ===");
    println!("1. Create customer");
    println!("2. Open account");
    println!("3. Deposit");
    println!("4. Withdraw");
    println!("5. Statement");
    println!("6. List accounts");
    println!("7. Exit");
}

/// Read one line after printing a label. Returns None on end of input.
fn prompt(input: &mut Input, label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;
    match input.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

fn report(err: AppError) {
    println!("{err}");
}

fn create_customer(service: &mut TellerService, input: &mut Input) -> Result<()> {
    let Some(name) = prompt(input, "Customer name")? else {
        return Ok(());
    };
    let Some(address) = prompt(input, "Address")? else {
        return Ok(());
    };
    let Some(tax_id) = prompt(input, "Tax ID (digits only)")? else {
        return Ok(());
    };

    match service.create_customer(name.trim(), address.trim(), tax_id.trim()) {
        Ok(customer) => println!("Customer {} created.", customer.name),
        Err(err) => report(err),
    }
    Ok(())
}

fn open_account(service: &mut TellerService, input: &mut Input) -> Result<()> {
    let Some(tax_id) = prompt(input, "Tax ID")? else {
        return Ok(());
    };

    match service.open_account(tax_id.trim()) {
        Ok(number) => println!("Account {number} opened."),
        Err(err) => report(err),
    }
    Ok(())
}

fn deposit(service: &mut TellerService, input: &mut Input) -> Result<()> {
    let Some((tax_id, amount)) = prompt_movement(input)? else {
        return Ok(());
    };

    match service.deposit(&tax_id, amount, Utc::now()) {
        Ok(receipt) => println!(
            "Deposited {} into account {}. Balance: {}",
            format_cents(receipt.amount_cents),
            receipt.account_number,
            format_cents(receipt.balance_cents)
        ),
        Err(err) => report(err),
    }
    Ok(())
}

fn withdraw(service: &mut TellerService, input: &mut Input) -> Result<()> {
    let Some((tax_id, amount)) = prompt_movement(input)? else {
        return Ok(());
    };

    match service.withdraw(&tax_id, amount, Utc::now()) {
        Ok(receipt) => println!(
            "Withdrew {} from account {}. Balance: {}",
            format_cents(receipt.amount_cents),
            receipt.account_number,
            format_cents(receipt.balance_cents)
        ),
        Err(err) => report(err),
    }
    Ok(())
}

/// Shared tax-ID + amount prompts for deposit and withdraw. Returns None
/// when the action is aborted (end of input or unparsable amount).
fn prompt_movement(input: &mut Input) -> Result<Option<(String, Cents)>> {
    let Some(tax_id) = prompt(input, "Tax ID")? else {
        return Ok(None);
    };
    let Some(raw) = prompt(input, "Amount")? else {
        return Ok(None);
    };

    match parse_cents(raw.trim()) {
        Ok(cents) => Ok(Some((tax_id.trim().to_string(), cents))),
        Err(err) => {
            println!("Invalid amount: {err}");
            Ok(None)
        }
    }
}

fn statement(service: &TellerService, input: &mut Input) -> Result<()> {
    let Some(tax_id) = prompt(input, "Tax ID")? else {
        return Ok(());
    };
    let Some(raw_filter) = prompt(input, "Filter by kind (deposit/withdrawal, empty for all)")?
    else {
        return Ok(());
    };

    let raw_filter = raw_filter.trim();
    let filter = if raw_filter.is_empty() {
        None
    } else {
        match TransactionKind::from_str(raw_filter) {
            Some(kind) => Some(kind),
            None => {
                println!("Unknown transaction kind: {raw_filter}");
                return Ok(());
            }
        }
    };

    match service.statement(tax_id.trim(), filter) {
        Ok(statement) => print_statement(&statement),
        Err(err) => report(err),
    }
    Ok(())
}

fn print_statement(statement: &Statement) {
    println!("================== STATEMENT ==================");
    if statement.records.is_empty() {
        println!("No transactions recorded.");
    } else {
        for record in &statement.records {
            println!(
                "{}  {:<10}  {}",
                record.recorded_at.format("%Y-%m-%d %H:%M:%S"),
                record.kind.as_str(),
                format_cents(record.amount_cents)
            );
        }
    }
    println!("Balance: {}", format_cents(statement.balance_cents));
    println!("===============================================");
}

fn list_accounts(service: &TellerService) {
    let accounts = service.list_accounts();
    if accounts.is_empty() {
        println!("No accounts open.");
        return;
    }

    for account in accounts {
        println!(
            "Account {}: balance {}, overdraft limit {}, customer {}",
            account.number,
            format_cents(account.balance_cents),
            format_cents(account.overdraft_limit_cents),
            account.customer_name
        );
    }
}
