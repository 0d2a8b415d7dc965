//! Data written through one service survives reopening the same file.

use lists_db::service::ListService;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[tokio::test]
async fn lists_persist_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("superlists.db");
    let path = path.to_string_lossy();

    let list_id = {
        let svc = ListService::new_local(&path).await.unwrap();
        let (list, _) = svc.create_list_with_item("Buy peacock feathers").await.unwrap();
        svc.create_item(&list.id, "Use peacock feathers to make a fly")
            .await
            .unwrap();
        list.id
    };

    let svc = ListService::new_local(&path).await.unwrap();
    let list = svc.get_list(&list_id).await.unwrap();
    let items = svc.items_for_list(&list.id).await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].text, "Buy peacock feathers");
    assert_eq!(items[1].text, "Use peacock feathers to make a fly");
}
