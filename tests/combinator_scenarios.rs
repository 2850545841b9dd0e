//! End-to-end chains mixing the sync, future and continuation forms.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use upshot::future::OutcomeFutureExt;
use upshot::testing::CallCounter;
use upshot::traverse::traverse;
use upshot::{assert_error, assert_error_eq, assert_success, Continuation, Outcome};

#[derive(Debug, Clone, PartialEq)]
struct Order {
    id: u32,
    quantity: u32,
    unit_price: u32,
}

#[derive(Debug, Clone, PartialEq)]
enum OrderError {
    NotFound(u32),
    EmptyOrder,
}

fn find_order(id: u32) -> Outcome<Order, OrderError> {
    match id {
        1 => Outcome::success(Order {
            id,
            quantity: 3,
            unit_price: 25,
        }),
        2 => Outcome::success(Order {
            id,
            quantity: 0,
            unit_price: 10,
        }),
        _ => Outcome::error(OrderError::NotFound(id)),
    }
}

fn non_empty(order: Order) -> Outcome<Order, OrderError> {
    if order.quantity > 0 {
        Outcome::success(order)
    } else {
        Outcome::error(OrderError::EmptyOrder)
    }
}

fn total(order: Order) -> u32 {
    order.quantity * order.unit_price
}

#[test]
fn success_map_value() {
    assert_eq!(Outcome::<i32, &str>::success(5).map(|x| x * 2).into_value(), Some(10));
}

#[test]
fn error_map_value_is_absent_and_function_never_runs() {
    let counter = CallCounter::new();

    let value = Outcome::<i32, &str>::error("boom")
        .map(counter.counted(|x: i32| x * 2))
        .into_value();

    assert_eq!(value, None);
    assert_eq!(counter.count(), 0);
}

#[test]
fn success_bind_value() {
    let value = Outcome::<i32, &str>::success(5)
        .bind(|x| {
            if x > 0 {
                Outcome::success(x)
            } else {
                Outcome::error("negative")
            }
        })
        .into_value();

    assert_eq!(value, Some(5));
}

#[test]
fn bind_then_map_chain() {
    let value = Outcome::<i32, &str>::success(2)
        .bind(|x| Outcome::success(x + 1))
        .map(|x| x * 10)
        .into_value();

    assert_eq!(value, Some(30));
}

#[test]
fn order_pipeline_sync() {
    assert_success!(find_order(1).bind(non_empty).map(total));
    assert_eq!(find_order(1).bind(non_empty).map(total), Outcome::Success(75));
    assert_error_eq!(find_order(2).bind(non_empty).map(total), OrderError::EmptyOrder);
    assert_error_eq!(find_order(9).bind(non_empty).map(total), OrderError::NotFound(9));
}

#[test]
fn ensure_sees_every_outcome() {
    let counter = CallCounter::new();

    let report: Vec<String> = [1, 2, 9]
        .into_iter()
        .map(|id| {
            find_order(id)
                .bind(non_empty)
                .map(total)
                .ensure(counter.counted(|o: Outcome<u32, OrderError>| {
                    Outcome::<String, ()>::success(match o {
                        Outcome::Success(t) => format!("total {}", t),
                        Outcome::Error(e) => format!("failed {:?}", e),
                    })
                }))
        })
        .flat_map(|o| o.into_value())
        .collect();

    assert_eq!(report, vec!["total 75", "failed EmptyOrder", "failed NotFound(9)"]);
    assert_eq!(counter.count(), 3);
}

#[test]
fn traverse_orders_stops_at_first_missing() {
    let counter = CallCounter::new();

    let orders = traverse(vec![1, 7, 2], counter.counted_mut(find_order));

    assert_error!(orders);
    assert_eq!(counter.count(), 2);
}

#[tokio::test]
async fn order_pipeline_async() {
    async fn fetch_order(id: u32) -> Outcome<Order, OrderError> {
        tokio::time::sleep(Duration::from_millis(1)).await;
        find_order(id)
    }

    let total_of = |id| {
        Outcome::<u32, OrderError>::success(id)
            .bind_async(fetch_order)
            .bind_then(|order| async move { non_empty(order) })
            .map_success(total)
    };

    assert_eq!(total_of(1).await, Outcome::Success(75));
    assert_eq!(total_of(2).await, Outcome::Error(OrderError::EmptyOrder));
    assert_eq!(total_of(5).await, Outcome::Error(OrderError::NotFound(5)));
}

#[test]
fn order_pipeline_with_callbacks() {
    fn fetch_order_cb(id: u32, done: Continuation<'static, Outcome<Order, OrderError>>) {
        thread::spawn(move || done.resume(find_order(id)));
    }

    let (tx, rx) = mpsc::channel();

    for id in [1, 3] {
        let tx = tx.clone();
        Outcome::<u32, OrderError>::success(id)
            .bind_with(fetch_order_cb)
            .run(move |o| tx.send((id, o.bind(non_empty).map(total))).unwrap());
    }
    drop(tx);

    let mut results: Vec<_> = rx.iter().collect();
    results.sort_by_key(|(id, _)| *id);

    assert_eq!(
        results,
        vec![
            (1, Outcome::Success(75)),
            (3, Outcome::Error(OrderError::NotFound(3))),
        ]
    );
}

#[test]
fn continuation_error_path_delivers_once_without_calling_function() {
    let calls = CallCounter::new();
    let delivered = CallCounter::new();
    let (tx, rx) = mpsc::channel();

    let tick = calls.clone();
    let seen = delivered.clone();
    find_order(4)
        .map_with(move |order, k| {
            tick.tick();
            k.resume(total(order));
        })
        .run(move |o| {
            seen.tick();
            tx.send(o).unwrap();
        });

    assert_eq!(rx.recv().unwrap(), Outcome::Error(OrderError::NotFound(4)));
    assert!(rx.recv_timeout(Duration::from_millis(20)).is_err());
    assert_eq!(calls.count(), 0);
    assert_eq!(delivered.count(), 1);
}
