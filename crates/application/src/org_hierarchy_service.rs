use std::collections::BTreeSet;
use std::sync::Arc;

use com360_core::{AppError, AppResult, EmpId, OrgId};
use tracing::debug;

use crate::EmployeeDirectoryRepository;

/// Expands a manager into the transitive set of their active reports.
#[derive(Clone)]
pub struct OrgHierarchyResolver {
    directory: Arc<dyn EmployeeDirectoryRepository>,
}

impl OrgHierarchyResolver {
    /// Creates a resolver backed by an employee directory.
    #[must_use]
    pub fn new(directory: Arc<dyn EmployeeDirectoryRepository>) -> Self {
        Self { directory }
    }

    /// Returns every active employee reporting to `root`, directly or not.
    ///
    /// The root itself is not part of the result.
    pub async fn subordinates(&self, org_id: OrgId, root: &EmpId) -> AppResult<BTreeSet<EmpId>> {
        self.expand(org_id, root).await
    }

    /// Same as [`Self::subordinates`] with the root added to the result.
    pub async fn subordinates_with_root(
        &self,
        org_id: OrgId,
        root: &EmpId,
    ) -> AppResult<BTreeSet<EmpId>> {
        let mut members = self.expand(org_id, root).await?;
        members.insert(root.clone());
        Ok(members)
    }

    /// Walks the reporting forest one level per directory query.
    ///
    /// Inactive reports are neither returned nor expanded. Reaching an
    /// employee twice means the superior links contain a cycle, which fails
    /// with `AppError::DataIntegrity` instead of looping.
    async fn expand(&self, org_id: OrgId, root: &EmpId) -> AppResult<BTreeSet<EmpId>> {
        if self.directory.find_employee(org_id, root).await?.is_none() {
            return Err(AppError::DataIntegrity(format!(
                "employee '{root}' does not exist in organization '{org_id}'"
            )));
        }

        let mut visited = BTreeSet::from([root.clone()]);
        let mut subordinates = BTreeSet::new();
        let mut frontier = vec![root.clone()];
        let mut depth = 0_usize;

        while !frontier.is_empty() {
            let frontier_members: BTreeSet<&EmpId> = frontier.iter().collect();
            let reports = self
                .directory
                .list_direct_reports(org_id, &frontier)
                .await?;
            let mut next_frontier = Vec::new();

            for report in reports {
                if report.org_id != org_id {
                    return Err(AppError::DataIntegrity(format!(
                        "employee '{}' of organization '{}' reports into organization '{org_id}'",
                        report.emp_id, report.org_id
                    )));
                }

                let reports_to_frontier = report
                    .superior_emp_id
                    .as_ref()
                    .is_some_and(|superior| frontier_members.contains(superior));
                if !reports_to_frontier {
                    return Err(AppError::DataIntegrity(format!(
                        "employee '{}' was returned as a report of an unrelated superior",
                        report.emp_id
                    )));
                }

                if !report.is_active() {
                    continue;
                }

                if !visited.insert(report.emp_id.clone()) {
                    return Err(AppError::DataIntegrity(format!(
                        "reporting cycle through employee '{}' under '{root}' in organization '{org_id}'",
                        report.emp_id
                    )));
                }

                subordinates.insert(report.emp_id.clone());
                next_frontier.push(report.emp_id);
            }

            frontier = next_frontier;
            depth += 1;
        }

        debug!(
            org_id = %org_id,
            root = %root,
            depth,
            subordinate_count = subordinates.len(),
            "expanded reporting hierarchy"
        );

        Ok(subordinates)
    }
}

#[cfg(test)]
mod tests;
