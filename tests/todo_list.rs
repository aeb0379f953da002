use tasklist::todo::{Filter, ParseFilterError, TodoList};

fn list_with(items: &[&str]) -> TodoList {
    let mut list = TodoList::new();
    for item in items {
        list.set_draft(*item);
        list.add_task();
    }
    list
}

fn texts(list: &TodoList) -> Vec<(&str, bool)> {
    list.tasks().iter().map(|t| (t.text(), t.is_completed())).collect()
}

#[test]
fn test_add_ignores_blank_drafts() {
    let mut list = TodoList::new();
    for draft in ["", " ", "   ", "\t", "\n  \t"] {
        list.set_draft(draft);
        assert_eq!(list.add_task(), None);
        assert!(list.is_empty(), "draft {:?} should not create a task", draft);
        assert_eq!(list.draft(), draft);
    }
}

#[test]
fn test_add_trims_and_clears_draft() {
    let mut list = TodoList::new();
    list.set_draft("  New todo  ");
    let id = list.add_task().expect("task should be created");

    assert_eq!(list.len(), 1);
    let task = list.get(id).unwrap();
    assert_eq!(task.text(), "New todo");
    assert!(!task.is_completed());
    assert_eq!(list.draft(), "");
}

#[test]
fn test_add_appends_in_order() {
    let list = list_with(&["first", "second", "third"]);
    assert_eq!(
        texts(&list),
        vec![("first", false), ("second", false), ("third", false)]
    );
}

#[test]
fn test_ids_are_unique() {
    let list = list_with(&["a", "b", "c", "d"]);
    let mut ids: Vec<_> = list.tasks().iter().map(|t| t.id()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

#[test]
fn test_draft_editing() {
    let mut list = TodoList::new();
    list.push_draft_char('h');
    list.push_draft_char('i');
    assert_eq!(list.draft(), "hi");
    list.pop_draft_char();
    assert_eq!(list.draft(), "h");
    list.clear_draft();
    assert_eq!(list.draft(), "");
    // Popping an empty draft is harmless
    list.pop_draft_char();
    assert_eq!(list.draft(), "");
}

#[test]
fn test_toggle_is_its_own_inverse() {
    let mut list = list_with(&["a", "b", "c"]);
    let id = list.tasks()[1].id();

    assert!(list.toggle_task(id));
    assert_eq!(texts(&list), vec![("a", false), ("b", true), ("c", false)]);

    assert!(list.toggle_task(id));
    assert_eq!(texts(&list), vec![("a", false), ("b", false), ("c", false)]);
}

#[test]
fn test_toggle_unknown_id_is_noop() {
    let mut list = list_with(&["a"]);
    let id = list.tasks()[0].id();
    list.toggle_task(id);
    list.clear_completed();
    assert!(list.is_empty());

    // The id is gone for good
    assert!(!list.toggle_task(id));
    assert!(list.is_empty());
}

#[test]
fn test_clear_completed_preserves_order_and_is_idempotent() {
    let mut list = list_with(&["one", "two", "three", "four", "five"]);
    let ids: Vec<_> = list.tasks().iter().map(|t| t.id()).collect();
    list.toggle_task(ids[1]);
    list.toggle_task(ids[3]);

    assert_eq!(list.clear_completed(), 2);
    assert_eq!(
        texts(&list),
        vec![("one", false), ("three", false), ("five", false)]
    );

    assert_eq!(list.clear_completed(), 0);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_counts_always_sum_to_len() {
    let mut list = list_with(&["a", "b", "c", "d"]);
    let ids: Vec<_> = list.tasks().iter().map(|t| t.id()).collect();

    for (step, id) in ids.iter().enumerate() {
        list.toggle_task(*id);
        assert_eq!(list.active_count() + list.completed_count(), list.len());
        assert_eq!(list.completed_count(), step + 1);
    }

    list.clear_completed();
    assert_eq!(list.active_count() + list.completed_count(), list.len());
    assert_eq!(list.len(), 0);
}

#[test]
fn test_visible_tasks_per_filter() {
    let mut list = list_with(&["a", "b", "c", "d"]);
    let ids: Vec<_> = list.tasks().iter().map(|t| t.id()).collect();
    list.toggle_task(ids[0]);
    list.toggle_task(ids[2]);

    let visible = |list: &TodoList| -> Vec<String> {
        list.visible_tasks().iter().map(|t| t.text().to_string()).collect()
    };

    assert_eq!(list.filter(), Filter::All);
    assert_eq!(visible(&list), vec!["a", "b", "c", "d"]);

    list.set_filter(Filter::Active);
    assert_eq!(visible(&list), vec!["b", "d"]);
    assert!(list.visible_tasks().iter().all(|t| !t.is_completed()));

    list.set_filter(Filter::Completed);
    assert_eq!(visible(&list), vec!["a", "c"]);
    assert!(list.visible_tasks().iter().all(|t| t.is_completed()));

    // Filtering never touches the underlying tasks
    assert_eq!(list.len(), 4);
}

#[test]
fn test_filter_cycle_and_parse() {
    assert_eq!(Filter::All.next(), Filter::Active);
    assert_eq!(Filter::Active.next(), Filter::Completed);
    assert_eq!(Filter::Completed.next(), Filter::All);

    assert_eq!("active".parse::<Filter>(), Ok(Filter::Active));
    assert_eq!(" Completed ".parse::<Filter>(), Ok(Filter::Completed));
    let err = "Done".parse::<Filter>().unwrap_err();
    assert_eq!(err, ParseFilterError("done".to_string()));
    assert_eq!(err.to_string(), "unknown filter 'done'");
    assert_eq!(Filter::Completed.to_string(), "Completed");
}

#[test]
fn test_items_left_label() {
    let mut list = list_with(&["a", "b"]);
    assert_eq!(list.items_left_label(), "2 items left");

    let first = list.tasks()[0].id();
    list.toggle_task(first);
    assert_eq!(list.items_left_label(), "1 item left");

    let second = list.tasks()[1].id();
    list.toggle_task(second);
    assert_eq!(list.items_left_label(), "0 items left");
}

#[test]
fn test_buy_milk_scenario() {
    let mut list = list_with(&["Buy milk", "Walk dog"]);
    assert_eq!(texts(&list), vec![("Buy milk", false), ("Walk dog", false)]);

    let milk = list.tasks()[0].id();
    list.toggle_task(milk);
    assert_eq!(list.active_count(), 1);
    assert_eq!(list.completed_count(), 1);

    list.set_filter(Filter::Completed);
    let visible: Vec<_> = list.visible_tasks().iter().map(|t| (t.text(), t.is_completed())).collect();
    assert_eq!(visible, vec![("Buy milk", true)]);

    list.clear_completed();
    assert_eq!(texts(&list), vec![("Walk dog", false)]);
    assert_eq!(list.completed_count(), 0);
}
