use std::sync::{Arc, Mutex};

use webdom::{AttrValue, Document, Element, MountError, NodeRef, RefObject};

#[test]
fn test_mount_returns_live_handle() {
    let mut doc = Document::new();
    let handle = doc.mount(Element::input().id("q")).unwrap();

    handle.set_value("rust");
    assert_eq!(doc.get("q").unwrap().value().as_deref(), Some("rust"));
    assert_eq!(
        doc.elements()[0].attribute("value"),
        Some(&AttrValue::Text("rust".into()))
    );
}

#[test]
fn test_duplicate_id_is_rejected() {
    let mut doc = Document::new();
    doc.mount(Element::input().id("q")).unwrap();

    let err = doc.mount(Element::input().id("q")).unwrap_err();
    assert_eq!(err, MountError::DuplicateId("q".into()));
    assert_eq!(doc.len(), 1);
}

#[test]
fn test_unmount_unknown_id() {
    let mut doc = Document::new();
    assert_eq!(
        doc.unmount("missing").unwrap_err(),
        MountError::NotMounted("missing".into())
    );
}

#[test]
fn test_handle_ref_is_filled_and_cleared() {
    let object = RefObject::new();
    assert!(object.current().is_none());

    let mut doc = Document::new();
    let handle = doc.mount(Element::input().id("q").node_ref(&object)).unwrap();

    let current = object.current().expect("ref should be attached on mount");
    assert!(current.ptr_eq(&handle));

    doc.unmount("q").unwrap();
    assert!(object.current().is_none(), "ref should be cleared on unmount");
}

#[test]
fn test_callback_ref_sees_attach_and_detach() {
    let calls: Arc<Mutex<Vec<Option<String>>>> = Arc::default();
    let sink = calls.clone();
    let node_ref = NodeRef::callback(move |node| {
        sink.lock().unwrap().push(node.map(|n| n.dom_id()));
    });

    let mut doc = Document::new();
    doc.mount(Element::input().id("cb").node_ref(node_ref)).unwrap();
    doc.unmount("cb").unwrap();

    assert_eq!(*calls.lock().unwrap(), vec![Some("cb".to_string()), None]);
}

#[test]
fn test_named_ref_resolves_through_document() {
    let mut doc = Document::new();
    doc.mount(Element::input().id("legacy").node_ref(NodeRef::named("field")))
        .unwrap();

    let handle = doc.named_ref("field").unwrap();
    assert_eq!(handle.dom_id(), "legacy");

    doc.unmount("legacy").unwrap();
    assert!(doc.named_ref("field").is_none());
}

#[test]
fn test_mounted_element_drops_its_ref() {
    let object = RefObject::new();
    let mut doc = Document::new();
    let handle = doc.mount(Element::input().id("q").node_ref(&object)).unwrap();

    assert!(handle.snapshot().node_ref.is_none());
}

#[test]
fn test_render_document() {
    let mut doc = Document::new();
    doc.mount(Element::input().id("a")).unwrap();
    doc.mount(Element::input().id("b").disabled(true)).unwrap();

    assert_eq!(
        doc.render_to_string(),
        "<input id=\"a\">\n<input id=\"b\" disabled>"
    );
}

#[test]
fn test_handle_cannot_change_id() {
    let mut doc = Document::new();
    doc.mount(Element::input().id("a")).unwrap();
    let b = doc.mount(Element::input().id("b")).unwrap();

    for name in ["id", "ID"] {
        assert_eq!(
            b.set_attribute(name, "a").unwrap_err(),
            MountError::IdChange("b".into())
        );
    }
    assert_eq!(
        b.remove_attribute("id").unwrap_err(),
        MountError::IdChange("b".into())
    );

    assert_eq!(b.dom_id(), "b");
    assert!(doc.get("b").unwrap().ptr_eq(&b));
    assert_eq!(doc.get("a").unwrap().dom_id(), "a");
}

#[test]
fn test_handle_sets_other_attributes() {
    let mut doc = Document::new();
    let handle = doc.mount(Element::input().id("q")).unwrap();

    handle.set_attribute("placeholder", "Search").unwrap();
    assert_eq!(
        handle.attribute("placeholder"),
        Some(AttrValue::Text("Search".into()))
    );
    assert_eq!(
        handle.remove_attribute("placeholder").unwrap(),
        Some(AttrValue::Text("Search".into()))
    );
}
