//! List/item isolation and ordering through the public service API.

use lists_db::service::ListService;
use pretty_assertions::assert_eq;
use rstest::rstest;

async fn test_service() -> ListService {
    ListService::new_local(":memory:").await.unwrap()
}

async fn texts(svc: &ListService, list_id: &str) -> Vec<String> {
    svc.items_for_list(list_id)
        .await
        .unwrap()
        .into_iter()
        .map(|item| item.text)
        .collect()
}

#[tokio::test]
async fn items_never_leak_between_lists() {
    let svc = test_service().await;
    let (edith, _) = svc.create_list_with_item("Buy peacock feathers").await.unwrap();
    let (francis, _) = svc.create_list_with_item("Buy milk").await.unwrap();
    svc.create_item(&edith.id, "Use peacock feathers to make a fly")
        .await
        .unwrap();

    assert_ne!(edith.id, francis.id);
    assert_eq!(
        texts(&svc, &edith.id).await,
        vec!["Buy peacock feathers", "Use peacock feathers to make a fly"]
    );
    assert_eq!(texts(&svc, &francis.id).await, vec!["Buy milk"]);
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(12)]
#[tokio::test]
async fn items_come_back_in_insertion_order(#[case] count: usize) {
    let svc = test_service().await;
    let list = svc.create_list().await.unwrap();
    let expected: Vec<String> = (1..=count).map(|n| format!("item number {n}")).collect();
    for text in &expected {
        svc.create_item(&list.id, text).await.unwrap();
    }

    assert_eq!(texts(&svc, &list.id).await, expected);
}

#[tokio::test]
async fn adding_an_item_keeps_the_list_identity() {
    let svc = test_service().await;
    let (list, first) = svc.create_list_with_item("first").await.unwrap();
    let second = svc.create_item(&list.id, "second").await.unwrap();

    assert_eq!(first.list_id, list.id);
    assert_eq!(second.list_id, list.id);
    assert_eq!(svc.count_lists().await.unwrap(), 1);
    assert_eq!(svc.count_items().await.unwrap(), 2);
}

#[tokio::test]
async fn concurrent_new_lists_each_get_one_item() {
    let svc = std::sync::Arc::new(test_service().await);
    let mut handles = Vec::new();
    for n in 0..8 {
        let svc = svc.clone();
        handles.push(tokio::spawn(async move {
            svc.create_list_with_item(&format!("todo {n}")).await.unwrap()
        }));
    }

    for handle in handles {
        let (list, item) = handle.await.unwrap();
        assert_eq!(texts(&svc, &list.id).await, vec![item.text]);
    }
    assert_eq!(svc.count_lists().await.unwrap(), 8);
    assert_eq!(svc.count_items().await.unwrap(), 8);
}
