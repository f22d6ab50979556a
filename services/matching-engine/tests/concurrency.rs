//! Concurrency test
//!
//! Many threads share one engine behind a read/write lock. Writers are
//! serialized, so the final state must be the same as any sequential
//! interleaving of the same requests.

use matching_engine::MatchingEngine;
use std::sync::{Arc, RwLock};
use std::thread;
use types::ids::{AccountId, Symbol};
use types::numeric::PRICE_TOTAL;
use types::order::TokenSide;

const THREADS: usize = 4;
const ROUNDS: u64 = 50;
const FUNDING: u64 = 100_000;

fn symbol() -> Symbol {
    Symbol::try_new("BTC_UP").unwrap()
}

fn accounts(worker: usize) -> (AccountId, AccountId) {
    (
        AccountId::try_new(format!("seller-{worker}")).unwrap(),
        AccountId::try_new(format!("buyer-{worker}")).unwrap(),
    )
}

#[test]
fn test_shared_engine_serializes_writers() {
    let mut engine = MatchingEngine::new();
    engine.create_symbol(symbol());
    for worker in 0..THREADS {
        let (seller, buyer) = accounts(worker);
        for account in [seller, buyer] {
            engine.create_account(account.clone()).unwrap();
            engine.onramp(&account, FUNDING).unwrap();
        }
    }
    let engine = Arc::new(RwLock::new(engine));

    let writers: Vec<_> = (0..THREADS)
        .map(|worker| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let (seller, buyer) = accounts(worker);
                for _ in 0..ROUNDS {
                    let mut guard = engine.write().unwrap();
                    guard.mint(&seller, &symbol(), 1, PRICE_TOTAL).unwrap();
                    guard.place_sell(&seller, &symbol(), TokenSide::Yes, 1, 500).unwrap();
                    drop(guard);

                    // every buy is preceded by this thread's own sell, so
                    // there is always at least one yes token resting at 500
                    let outcome = engine
                        .write()
                        .unwrap()
                        .place_buy(&buyer, &symbol(), TokenSide::Yes, 1, 500)
                        .unwrap();
                    assert_eq!(outcome.executed_quantity, 1);
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..2)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                for _ in 0..ROUNDS {
                    let guard = engine.read().unwrap();
                    let ledger = guard.store().ledger();
                    assert_eq!(
                        ledger.token_supply(&symbol(), TokenSide::Yes),
                        ledger.token_supply(&symbol(), TokenSide::No)
                    );
                    let book = guard.snapshot_order_book(&symbol()).unwrap();
                    for level in book.yes.iter().chain(book.no.iter()) {
                        assert_eq!(level.total, level.orders.iter().map(|order| order.quantity).sum::<u64>());
                    }
                }
            })
        })
        .collect();

    for handle in writers.into_iter().chain(readers) {
        handle.join().unwrap();
    }

    let engine = engine.read().unwrap();
    let ledger = engine.store().ledger();
    let minted = THREADS as u64 * ROUNDS;
    assert_eq!(ledger.token_supply(&symbol(), TokenSide::Yes), minted);
    assert_eq!(ledger.token_supply(&symbol(), TokenSide::No), minted);
    assert_eq!(
        ledger.currency_supply() + minted * PRICE_TOTAL,
        FUNDING * 2 * THREADS as u64
    );

    let book = engine.store().book().get(&symbol()).unwrap();
    assert!(book.yes.is_empty());
    assert!(book.no.is_empty());

    for worker in 0..THREADS {
        let (_, buyer) = accounts(worker);
        let position = ledger.position(&buyer, &symbol()).unwrap();
        assert_eq!(position.yes.available, ROUNDS);
        assert_eq!(ledger.balance(&buyer).unwrap().available, FUNDING - ROUNDS * 500);
    }
}

#[test]
fn test_independent_engines_in_parallel() {
    let handles: Vec<_> = ["ETH_UP", "SOL_UP", "DOGE_UP"]
        .into_iter()
        .map(|name| {
            thread::spawn(move || {
                let market = Symbol::try_new(name).unwrap();
                let alice = AccountId::try_new("alice").unwrap();
                let bob = AccountId::try_new("bob").unwrap();
                let mut engine = MatchingEngine::new();
                engine.create_symbol(market.clone());
                for account in [&alice, &bob] {
                    engine.create_account(account.clone()).unwrap();
                    engine.onramp(account, FUNDING).unwrap();
                }

                let mut executed = 0;
                for _ in 0..ROUNDS {
                    engine.place_buy(&alice, &market, TokenSide::Yes, 1, 650).unwrap();
                    executed += engine
                        .place_buy(&bob, &market, TokenSide::No, 1, 350)
                        .unwrap()
                        .executed_quantity;
                }
                executed
            })
        })
        .collect();

    let total: u64 = handles.into_iter().map(|handle| handle.join().unwrap()).sum();
    assert_eq!(total, 3 * ROUNDS);
}
