use std::rc::Rc;
use std::sync::Arc;

use chrono::Utc;

use console::domain::a001_employee::EmployeePage;
use console::domain::a005_leave::LeavePage;
use console::domain::a008_task::TaskBoardPage;
use console::shared::surfaces::{TracingNavigator, TracingNotifier};
use console::shared::{config, logging};
use console::system::notifications::{HttpTransport, NotificationWidget};
use contracts::domain::a005_leave::LeaveId;
use contracts::domain::a008_task::{BoardColumn, TaskId};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    let config = config::load_config()?;

    let today = Utc::now().date_naive();
    let notifier = Rc::new(TracingNotifier);
    let navigator = Rc::new(TracingNavigator);

    let employees = EmployeePage::new(notifier.clone(), navigator);
    let stats = employees.stats();
    tracing::info!(
        total = stats.total,
        active = stats.active,
        on_leave = stats.on_leave,
        "employee directory ready"
    );

    let mut leaves = LeavePage::new(notifier.clone(), today);
    let _ = leaves.approve(LeaveId(1));
    tracing::info!(pending = leaves.pending_count(), "leave requests");

    let mut board = TaskBoardPage::new(notifier);
    let _ = board.move_task(TaskId(1), BoardColumn::InProgress);
    for (column, count) in board.column_counts() {
        tracing::info!(column = column.as_str(), count, "board column");
    }

    let transport = Arc::new(HttpTransport::new(&config.notifications));
    let mut widget = NotificationWidget::new(transport, &config.notifications);
    widget.refresh().await;
    tracing::info!(unread = widget.unread_count(), "notifications");

    Ok(())
}
