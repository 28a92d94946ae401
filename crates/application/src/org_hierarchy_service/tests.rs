use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use com360_core::{AppError, AppResult, EmpId, OrgId};
use com360_domain::{EmployeeNode, EmployeeStatus};

use crate::EmployeeDirectoryRepository;
use crate::test_fakes::{FakeEmployeeDirectory, emp, emp_set};

use super::OrgHierarchyResolver;

fn org() -> OrgId {
    OrgId::new(100)
}

fn scenario_directory() -> FakeEmployeeDirectory {
    FakeEmployeeDirectory::default()
        .with_employee(org(), "E1", None, EmployeeStatus::Active)
        .with_employee(org(), "E2", Some("E1"), EmployeeStatus::Active)
        .with_employee(org(), "E3", Some("E1"), EmployeeStatus::Active)
        .with_employee(org(), "E4", Some("E2"), EmployeeStatus::Active)
        .with_employee(org(), "E5", None, EmployeeStatus::Active)
}

#[tokio::test]
async fn subordinates_are_transitive_and_exclude_root() -> AppResult<()> {
    let resolver = OrgHierarchyResolver::new(Arc::new(scenario_directory()));

    let members = resolver.subordinates(org(), &emp("E1")?).await?;

    assert_eq!(members, emp_set(&["E2", "E3", "E4"])?);
    Ok(())
}

#[tokio::test]
async fn subordinates_with_root_adds_the_manager() -> AppResult<()> {
    let resolver = OrgHierarchyResolver::new(Arc::new(scenario_directory()));

    let members = resolver.subordinates_with_root(org(), &emp("E2")?).await?;

    assert_eq!(members, emp_set(&["E2", "E4"])?);
    Ok(())
}

#[tokio::test]
async fn leaf_employee_has_no_subordinates() -> AppResult<()> {
    let resolver = OrgHierarchyResolver::new(Arc::new(scenario_directory()));

    let members = resolver.subordinates(org(), &emp("E4")?).await?;

    assert!(members.is_empty());
    Ok(())
}

#[tokio::test]
async fn inactive_reports_and_their_subtrees_are_skipped() -> AppResult<()> {
    let directory = FakeEmployeeDirectory::default()
        .with_employee(org(), "M", None, EmployeeStatus::Active)
        .with_employee(org(), "A", Some("M"), EmployeeStatus::Active)
        .with_employee(org(), "I", Some("M"), EmployeeStatus::Inactive)
        .with_employee(org(), "X", Some("I"), EmployeeStatus::Active);
    let resolver = OrgHierarchyResolver::new(Arc::new(directory));

    let members = resolver.subordinates(org(), &emp("M")?).await?;

    assert_eq!(members, emp_set(&["A"])?);
    Ok(())
}

#[tokio::test]
async fn two_node_cycle_is_a_data_integrity_error() -> AppResult<()> {
    let directory = FakeEmployeeDirectory::default()
        .with_employee(org(), "A", Some("B"), EmployeeStatus::Active)
        .with_employee(org(), "B", Some("A"), EmployeeStatus::Active);
    let resolver = OrgHierarchyResolver::new(Arc::new(directory));

    for root in ["A", "B"] {
        let result = resolver.subordinates(org(), &emp(root)?).await;
        assert!(matches!(result, Err(AppError::DataIntegrity(_))));
    }
    Ok(())
}

#[tokio::test]
async fn self_reporting_employee_is_a_data_integrity_error() -> AppResult<()> {
    let directory =
        FakeEmployeeDirectory::default().with_employee(org(), "A", Some("A"), EmployeeStatus::Active);
    let resolver = OrgHierarchyResolver::new(Arc::new(directory));

    let result = resolver.subordinates(org(), &emp("A")?).await;

    assert!(matches!(result, Err(AppError::DataIntegrity(_))));
    Ok(())
}

#[tokio::test]
async fn unknown_root_is_a_data_integrity_error() -> AppResult<()> {
    let resolver = OrgHierarchyResolver::new(Arc::new(scenario_directory()));

    let result = resolver.subordinates(OrgId::new(200), &emp("E1")?).await;

    assert!(matches!(result, Err(AppError::DataIntegrity(_))));
    Ok(())
}

#[tokio::test]
async fn query_count_is_bounded_by_depth() -> AppResult<()> {
    let mut directory =
        FakeEmployeeDirectory::default().with_employee(org(), "R", None, EmployeeStatus::Active);
    // Three levels below the root, four children per node.
    let mut level = vec!["R".to_owned()];
    for depth in 0..3 {
        let mut next = Vec::new();
        for parent in &level {
            for child in 0..4 {
                let id = format!("{parent}.{depth}{child}");
                directory =
                    directory.with_employee(org(), &id, Some(parent.as_str()), EmployeeStatus::Active);
                next.push(id);
            }
        }
        level = next;
    }
    let directory = Arc::new(directory);
    let resolver = OrgHierarchyResolver::new(directory.clone());

    let members = resolver.subordinates(org(), &emp("R")?).await?;

    assert_eq!(members.len(), 4 + 16 + 64);
    // One batch per level plus the empty probe below the leaves.
    assert_eq!(directory.report_query_count().await, 4);
    Ok(())
}

#[tokio::test]
async fn every_reachable_node_appears_exactly_once() -> AppResult<()> {
    let directory = scenario_directory()
        .with_employee(org(), "E6", Some("E4"), EmployeeStatus::Active)
        .with_employee(org(), "E7", Some("E3"), EmployeeStatus::Active);
    let resolver = OrgHierarchyResolver::new(Arc::new(directory));

    let members = resolver.subordinates(org(), &emp("E1")?).await?;
    let expected: BTreeSet<EmpId> = emp_set(&["E2", "E3", "E4", "E6", "E7"])?;

    assert_eq!(members, expected);
    Ok(())
}

/// Directory that knows the root and answers every reports query with fixed rows.
struct FixedReportsDirectory {
    root: EmployeeNode,
    reports: Vec<EmployeeNode>,
}

impl FixedReportsDirectory {
    fn new(reports: Vec<EmployeeNode>) -> AppResult<Self> {
        Ok(Self {
            root: EmployeeNode {
                emp_id: emp("E1")?,
                org_id: org(),
                superior_emp_id: None,
                status: EmployeeStatus::Active,
            },
            reports,
        })
    }
}

#[async_trait]
impl EmployeeDirectoryRepository for FixedReportsDirectory {
    async fn find_employee(
        &self,
        org_id: OrgId,
        emp_id: &EmpId,
    ) -> AppResult<Option<EmployeeNode>> {
        Ok((self.root.org_id == org_id && &self.root.emp_id == emp_id).then(|| self.root.clone()))
    }

    async fn list_direct_reports(
        &self,
        _org_id: OrgId,
        _superior_ids: &[EmpId],
    ) -> AppResult<Vec<EmployeeNode>> {
        Ok(self.reports.clone())
    }

    async fn list_employees(&self, _org_id: OrgId) -> AppResult<Vec<EmployeeNode>> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn report_from_another_organization_is_a_data_integrity_error() -> AppResult<()> {
    let directory = FixedReportsDirectory::new(vec![EmployeeNode {
        emp_id: emp("E2")?,
        org_id: OrgId::new(200),
        superior_emp_id: Some(emp("E1")?),
        status: EmployeeStatus::Active,
    }])?;
    let resolver = OrgHierarchyResolver::new(Arc::new(directory));

    let result = resolver.subordinates(org(), &emp("E1")?).await;

    assert!(matches!(result, Err(AppError::DataIntegrity(_))));
    Ok(())
}

#[tokio::test]
async fn report_of_an_unrelated_superior_is_a_data_integrity_error() -> AppResult<()> {
    let directory = FixedReportsDirectory::new(vec![EmployeeNode {
        emp_id: emp("E4")?,
        org_id: org(),
        superior_emp_id: Some(emp("E9")?),
        status: EmployeeStatus::Active,
    }])?;
    let resolver = OrgHierarchyResolver::new(Arc::new(directory));

    let result = resolver.subordinates(org(), &emp("E1")?).await;

    assert!(matches!(result, Err(AppError::DataIntegrity(_))));
    Ok(())
}
