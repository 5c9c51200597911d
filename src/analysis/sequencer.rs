use crate::core::ElementType;

/// Which class the scan is currently inside.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClassScope {
    #[default]
    NoClass,
    InClass(String),
}

/// Numbers elements relative to their enclosing class.
///
/// One sequencer covers one file; a new file starts outside any class.
#[derive(Debug, Clone)]
pub struct ClassSequencer {
    scope: ClassScope,
    next_item: usize,
}

impl Default for ClassSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassSequencer {
    pub fn new() -> Self {
        Self {
            scope: ClassScope::NoClass,
            next_item: 1,
        }
    }

    pub fn scope(&self) -> &ClassScope {
        &self.scope
    }

    /// Item number of the next element in document order.
    pub fn number(&mut self, element_type: ElementType, name: &str) -> usize {
        match element_type {
            ElementType::Class => {
                self.scope = ClassScope::InClass(name.to_string());
                self.next_item = 2;
                1
            }
            ElementType::Method | ElementType::Property | ElementType::ClassConstant => {
                if self.scope == ClassScope::NoClass {
                    log::debug!("{} '{}' reported outside of a class", element_type, name);
                }
                let number = self.next_item;
                self.next_item += 1;
                number
            }
            ElementType::Function | ElementType::Variable | ElementType::Constant => 1,
        }
    }
}
