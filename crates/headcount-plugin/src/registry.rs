// File: crates/headcount-plugin/src/registry.rs
// Summary: Explicit startup registry of visualizations, keyed by id.

use crate::employee_status::EmployeeStatusChart;
use crate::error::PluginError;
use crate::visualization::Visualization;

#[derive(Default)]
pub struct Registry {
    entries: Vec<Box<dyn Visualization>>,
}

impl Registry {
    pub fn new() -> Self { Self::default() }

    /// Registry holding every visualization this crate ships.
    pub fn with_builtin() -> Self {
        let mut reg = Self::new();
        // a fresh registry has no ids to collide with
        let _ = reg.register(Box::new(EmployeeStatusChart::new()));
        reg
    }

    pub fn register(&mut self, vis: Box<dyn Visualization>) -> Result<(), PluginError> {
        let id = vis.id();
        if self.entries.iter().any(|v| v.id() == id) {
            return Err(PluginError::DuplicateId(id));
        }
        log::debug!("registered visualization `{id}`");
        self.entries.push(vis);
        Ok(())
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut (dyn Visualization + 'static)> {
        self.entries.iter_mut().find(|v| v.id() == id).map(|v| &mut **v)
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.entries.iter().map(|v| v.id()).collect()
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registers_employee_chart() {
        let mut reg = Registry::with_builtin();
        assert_eq!(reg.ids(), [EmployeeStatusChart::ID]);
        assert!(reg.get_mut(EmployeeStatusChart::ID).is_some());
        assert!(reg.get_mut("missing").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut reg = Registry::with_builtin();
        let err = reg.register(Box::new(EmployeeStatusChart::new())).unwrap_err();
        assert!(matches!(err, PluginError::DuplicateId("employee_status_chart")));
        assert_eq!(reg.len(), 1);
    }
}
