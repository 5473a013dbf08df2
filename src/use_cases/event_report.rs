use std::collections::HashSet;

use crate::domain::errors::GuestError;
use crate::domain::ports::GuestRepository;

// One report row per confirmed guest.
#[derive(Clone, Debug)]
pub struct ReportRow {
    pub name: String,
    pub companions: Vec<String>,
}

// Aggregated report over all confirmed guests. The total counts distinct
// names (trimmed, case-insensitive) across guests and companions, so a
// companion sharing a guest's name is counted once.
#[derive(Clone, Debug)]
pub struct EventReport {
    pub rows: Vec<ReportRow>,
    pub total_people: usize,
}

// Report generation use case with an injected repository.
pub struct EventReportUseCase<R> {
    pub repo: R,
}

impl<R> EventReportUseCase<R>
where
    R: GuestRepository,
{
    pub async fn execute(&self) -> Result<EventReport, GuestError> {
        let guests = self
            .repo
            .list_confirmed_guests()
            .await
            .map_err(GuestError::Storage)?;

        let mut distinct = HashSet::new();
        let mut rows = Vec::with_capacity(guests.len());

        for guest in guests {
            distinct.insert(normalized_name(&guest.name));

            let companions: Vec<String> = guest
                .companions
                .iter()
                .map(|companion| companion.name.clone())
                .collect();
            for name in &companions {
                distinct.insert(normalized_name(name));
            }

            rows.push(ReportRow {
                name: guest.name,
                companions,
            });
        }

        Ok(EventReport {
            rows,
            total_people: distinct.len(),
        })
    }
}

fn normalized_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Companion, Guest, Participation};
    use crate::use_cases::test_support::{FailureFlags, RecordingRepository};

    fn confirmed_guest(id: i64, name: &str, companions: &[&str]) -> Guest {
        Guest {
            id,
            name: name.to_string(),
            attendance_confirmed: true,
            participation: if companions.is_empty() {
                Participation::Alone
            } else {
                Participation::Accompanied
            },
            companion_count: companions.len() as i32,
            companions: companions
                .iter()
                .enumerate()
                .map(|(index, name)| Companion {
                    id: index as i64 + 1,
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn when_guests_are_confirmed_then_rows_follow_insertion_order() {
        let repo = RecordingRepository::new();
        repo.insert_test_guest(confirmed_guest(1, "João Silva", &[]));
        repo.insert_test_guest(confirmed_guest(2, "Maria Santos", &["Ana Costa", "Pedro Costa"]));
        let use_case = EventReportUseCase { repo };

        let report = use_case
            .execute()
            .await
            .expect("expected report to succeed");

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].name, "João Silva");
        assert_eq!(report.rows[1].name, "Maria Santos");
        assert_eq!(report.rows[1].companions, vec!["Ana Costa", "Pedro Costa"]);
        assert_eq!(report.total_people, 4);
    }

    #[tokio::test]
    async fn when_unconfirmed_guest_exists_then_it_is_left_out() {
        let repo = RecordingRepository::new();
        repo.insert_test_guest(confirmed_guest(1, "João Silva", &[]));
        let mut declined = confirmed_guest(2, "Maria Santos", &[]);
        declined.attendance_confirmed = false;
        repo.insert_test_guest(declined);
        let use_case = EventReportUseCase { repo };

        let report = use_case
            .execute()
            .await
            .expect("expected report to succeed");

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.total_people, 1);
    }

    #[tokio::test]
    async fn when_companion_shares_guest_name_then_headcount_dedupes() {
        let repo = RecordingRepository::new();
        repo.insert_test_guest(confirmed_guest(1, "João Silva", &["João Silva"]));
        let use_case = EventReportUseCase { repo };

        let report = use_case
            .execute()
            .await
            .expect("expected report to succeed");

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.total_people, 1);
    }

    #[tokio::test]
    async fn when_names_differ_only_in_case_then_headcount_dedupes() {
        let repo = RecordingRepository::new();
        repo.insert_test_guest(confirmed_guest(1, "Ana", &["ana"]));
        let use_case = EventReportUseCase { repo };

        let report = use_case
            .execute()
            .await
            .expect("expected report to succeed");

        assert_eq!(report.total_people, 1);
    }

    #[tokio::test]
    async fn when_names_differ_only_in_surrounding_whitespace_then_headcount_dedupes() {
        let repo = RecordingRepository::new();
        repo.insert_test_guest(confirmed_guest(1, "Ana Costa", &[" Ana Costa "]));
        let use_case = EventReportUseCase { repo };

        let report = use_case
            .execute()
            .await
            .expect("expected report to succeed");

        assert_eq!(report.total_people, 1);
    }

    #[tokio::test]
    async fn when_no_guest_is_confirmed_then_report_is_empty_with_zero_total() {
        let use_case = EventReportUseCase {
            repo: RecordingRepository::new(),
        };

        let report = use_case
            .execute()
            .await
            .expect("expected report to succeed");

        assert!(report.rows.is_empty());
        assert_eq!(report.total_people, 0);
    }

    #[tokio::test]
    async fn when_repository_fails_then_returns_storage_error() {
        let use_case = EventReportUseCase {
            repo: RecordingRepository::new().with_failures(FailureFlags {
                list: true,
                ..Default::default()
            }),
        };

        let result = use_case.execute().await;

        assert!(matches!(result, Err(GuestError::Storage(_))));
    }
}
