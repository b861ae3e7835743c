use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap, HashSet};

use super::DashboardService;
use crate::models::dashboard::entities::DashboardSnapshot;
use crate::models::dashboard::responses::{DashboardStats, SubjectProgress};
use crate::models::ApiResponse;
use crate::services::storage_error_response;

pub async fn get_dashboard(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.load_dashboard_snapshot().await {
        Ok(snapshot) => {
            let stats = compute_dashboard_stats(&snapshot, Utc::now());
            Ok(HttpResponse::Ok().json(ApiResponse::success(stats, "查询成功")))
        }
        Err(e) => Ok(storage_error_response("读取看板数据失败", e)),
    }
}

/// 根据快照计算看板统计
///
/// 作业与提交各遍历一次。截止时间按秒比较，与存储层的“即将到期”查询一致。
/// 指向不存在作业的提交仍计入 completed 和平均分，但不归入任何科目。
pub fn compute_dashboard_stats(snapshot: &DashboardSnapshot, now: DateTime<Utc>) -> DashboardStats {
    let now_ts = now.timestamp();

    let mut subject_breakdown: BTreeMap<String, SubjectProgress> = BTreeMap::new();
    let mut subject_of: HashMap<i64, &str> = HashMap::with_capacity(snapshot.homeworks.len());
    let mut pending = 0u64;

    for homework in &snapshot.homeworks {
        subject_breakdown
            .entry(homework.subject.clone())
            .or_default()
            .total += 1;
        subject_of.insert(homework.id, homework.subject.as_str());
        if homework.due_date.timestamp() >= now_ts {
            pending += 1;
        }
    }

    let mut submitted_homeworks: HashSet<i64> = HashSet::new();
    let mut grade_sum = 0.0;
    let mut graded = 0u64;

    for submission in &snapshot.submissions {
        submitted_homeworks.insert(submission.homework_id);

        if let Some(grade) = submission.grade {
            grade_sum += grade;
            graded += 1;
        }

        if let Some(subject) = subject_of.get(&submission.homework_id)
            && let Some(progress) = subject_breakdown.get_mut(*subject)
        {
            progress.submitted += 1;
        }
    }

    let avg_grade = if graded > 0 {
        Some(grade_sum / graded as f64)
    } else {
        None
    };

    DashboardStats {
        total: snapshot.homeworks.len() as u64,
        pending,
        completed: submitted_homeworks.len() as u64,
        avg_grade,
        subject_breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dashboard::entities::{HomeworkDigest, SubmissionDigest};
    use chrono::Duration;

    fn homework(id: i64, subject: &str, due_date: DateTime<Utc>) -> HomeworkDigest {
        HomeworkDigest {
            id,
            subject: subject.to_string(),
            due_date,
        }
    }

    fn submission(homework_id: i64, grade: Option<f64>) -> SubmissionDigest {
        SubmissionDigest { homework_id, grade }
    }

    #[test]
    fn test_empty_snapshot() {
        let stats = compute_dashboard_stats(&DashboardSnapshot::default(), Utc::now());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.pending, 0);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.avg_grade, None);
        assert!(stats.subject_breakdown.is_empty());
    }

    #[test]
    fn test_two_subjects_with_one_graded_submission() {
        let now = Utc::now();
        let snapshot = DashboardSnapshot {
            homeworks: vec![
                homework(1, "Math", now + Duration::days(3)),
                homework(2, "English", now - Duration::days(1)),
            ],
            submissions: vec![submission(2, Some(90.0)), submission(2, None)],
        };

        let stats = compute_dashboard_stats(&snapshot, now);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.avg_grade, Some(90.0));
        assert_eq!(
            stats.subject_breakdown["Math"],
            SubjectProgress {
                total: 1,
                submitted: 0
            }
        );
        assert_eq!(
            stats.subject_breakdown["English"],
            SubjectProgress {
                total: 1,
                submitted: 2
            }
        );
    }

    #[test]
    fn test_average_is_plain_mean() {
        let now = Utc::now();
        let snapshot = DashboardSnapshot {
            homeworks: vec![
                homework(1, "Math", now),
                homework(2, "Math", now + Duration::hours(1)),
            ],
            submissions: vec![
                submission(1, Some(80.0)),
                submission(1, Some(100.0)),
                submission(2, Some(60.0)),
            ],
        };

        let stats = compute_dashboard_stats(&snapshot, now);
        assert_eq!(stats.avg_grade, Some(80.0));
        assert_eq!(stats.completed, 2);
        // 截止时间恰好等于 now 仍算未到期
        assert_eq!(stats.pending, 2);
        assert_eq!(
            stats.subject_breakdown["Math"],
            SubjectProgress {
                total: 2,
                submitted: 3
            }
        );
    }

    #[test]
    fn test_orphan_submission_has_no_subject() {
        let now = Utc::now();
        let snapshot = DashboardSnapshot {
            homeworks: vec![homework(1, "Physics", now - Duration::days(2))],
            submissions: vec![submission(42, Some(70.0))],
        };

        let stats = compute_dashboard_stats(&snapshot, now);
        assert_eq!(stats.pending, 0);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.avg_grade, Some(70.0));
        assert_eq!(stats.subject_breakdown.len(), 1);
        assert_eq!(stats.subject_breakdown["Physics"].submitted, 0);
    }

    #[test]
    fn test_subjects_are_sorted() {
        let now = Utc::now();
        let snapshot = DashboardSnapshot {
            homeworks: vec![
                homework(1, "Science", now),
                homework(2, "Art", now),
                homework(3, "Math", now),
            ],
            submissions: vec![],
        };

        let stats = compute_dashboard_stats(&snapshot, now);
        let subjects: Vec<&str> = stats.subject_breakdown.keys().map(String::as_str).collect();
        assert_eq!(subjects, vec!["Art", "Math", "Science"]);
    }
}
