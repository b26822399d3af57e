use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::HashSet;
use std::rc::Rc;

use anyhow::Result;

use crate::delegate::TreeNode;
use crate::page::ElementIds;
use crate::page::Page;


/// An in-memory document. Records everything the handlers do to it.
#[derive(Default)]
pub struct FakePage {
    pathname: Option<String>,
    elements: HashSet<String>,
    inputs: HashMap<String, String>,
    broken_toggles: bool,
    texts: RefCell<HashMap<String, String>>,
    disabled: RefCell<HashSet<String>>,
    disabled_history: RefCell<Vec<(String, bool)>>,
    navigations: RefCell<Vec<String>>,
}

impl FakePage {
    pub fn at(pathname: &str) -> Self {
        let ids = ElementIds::default();
        Self {
            pathname: Some(pathname.to_string()),
            elements: HashSet::from([ids.logout]),
            ..Default::default()
        }
    }

    pub fn login_form(username: &str, password: &str) -> Self {
        let ids = ElementIds::default();
        Self {
            pathname: Some("/login".to_string()),
            elements: HashSet::from([
                ids.login_username.clone(),
                ids.login_password.clone(),
                ids.login_submit,
                ids.login_alert,
            ]),
            inputs: HashMap::from([
                (ids.login_username, username.to_string()),
                (ids.login_password, password.to_string()),
            ]),
            ..Default::default()
        }
    }

    pub fn without(mut self, id: &str) -> Self {
        self.elements.remove(id);
        self.inputs.remove(id);
        self
    }

    pub fn without_location(mut self) -> Self {
        self.pathname = None;
        self
    }

    pub fn with_broken_toggles(mut self) -> Self {
        self.broken_toggles = true;
        self
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.texts.borrow().get(id).cloned()
    }

    pub fn disabled_history(&self) -> Vec<(String, bool)> {
        self.disabled_history.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }
}

impl Page for FakePage {
    fn pathname(&self) -> Option<String> {
        self.pathname.clone()
    }

    fn input_value(&self, id: &str) -> Option<String> {
        self.inputs.get(id).cloned()
    }

    fn set_text(&self, id: &str, text: &str) {
        if self.elements.contains(id) {
            self.texts
                .borrow_mut()
                .insert(id.to_string(), text.to_string());
        }
    }

    fn is_disabled(&self, id: &str) -> bool {
        self.disabled.borrow().contains(id)
    }

    fn set_disabled(&self, id: &str, disabled: bool) -> Result<()> {
        if self.broken_toggles || !self.elements.contains(id) {
            anyhow::bail!("cannot toggle #{id}");
        }
        if disabled {
            self.disabled.borrow_mut().insert(id.to_string());
        } else {
            self.disabled.borrow_mut().remove(id);
        }
        self.disabled_history
            .borrow_mut()
            .push((id.to_string(), disabled));
        Ok(())
    }

    fn navigate(&self, route: &str) {
        self.navigations.borrow_mut().push(route.to_string());
    }
}

/// A parent-linked node for exercising click delegation.
#[derive(Clone, Debug)]
pub struct FakeNode(Rc<NodeData>);

#[derive(Debug)]
struct NodeData {
    id: Option<String>,
    parent: Option<FakeNode>,
}

impl FakeNode {
    pub fn root(id: Option<&str>) -> Self {
        Self(Rc::new(NodeData {
            id: id.map(str::to_string),
            parent: None,
        }))
    }

    pub fn child(&self, id: Option<&str>) -> Self {
        Self(Rc::new(NodeData {
            id: id.map(str::to_string),
            parent: Some(self.clone()),
        }))
    }
}

impl TreeNode for FakeNode {
    fn tree_id(&self) -> Option<String> {
        self.0.id.clone()
    }

    fn tree_parent(&self) -> Option<Self> {
        self.0.parent.clone()
    }
}
