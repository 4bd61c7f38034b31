use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cmms_console::AppState;
use cmms_console::pages::common::LoadState;
use cmms_console::pages::components::ComponentsPage;
use cmms_console::pages::dashboard::DashboardPage;
use cmms_console::pages::machine_detail::MachineDetailPage;
use cmms_console::pages::machines::MachinesPage;
use cmms_console::pages::work_orders::WorkOrdersPage;
use cmms_console::services::api_client::ApiClient;
use cmms_console::view;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cmms_console=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let api = ApiClient::from_env();
    tracing::info!("Using CMMS API at {}", api.base_url());
    let state = AppState::new(api);

    let mut dashboard = DashboardPage::new();
    dashboard.load(&state.reports).await;
    render_page("dashboard", dashboard.state(), || {
        view::dashboard(dashboard.stats())
    });

    let mut machines = MachinesPage::new();
    machines.load(&state.machines).await;
    render_page("machines", machines.state(), || {
        let mut out = String::from("Machines\n");
        out.push_str("  ");
        out.push_str(&view::machine_summary(&machines.stats()));
        let filtered = machines.filtered();
        if filtered.is_empty() {
            out.push_str(&view::empty_state("machines", machines.has_active_filters()));
        } else {
            for machine in filtered {
                out.push_str(&view::machine_card(machine));
            }
        }
        out
    });

    let mut work_orders = WorkOrdersPage::new();
    work_orders.load(&state.work_orders, &state.machines).await;
    render_page("work orders", work_orders.state(), || {
        let mut out = String::from("Work Orders\n");
        out.push_str("  ");
        out.push_str(&view::work_order_summary(&work_orders.stats()));
        let filtered = work_orders.filtered();
        if filtered.is_empty() {
            out.push_str(&view::empty_state(
                "work orders",
                work_orders.has_active_filters(),
            ));
        } else {
            for order in filtered {
                out.push_str(&view::work_order_row(
                    order,
                    work_orders.machine_name(&order.machine_id),
                ));
            }
        }
        out
    });

    let mut components = ComponentsPage::new();
    components
        .load(&state.reports, &state.machines, &state.components)
        .await;
    render_page("components", components.state(), || {
        let mut out = String::from("Components\n");
        let filtered = components.filtered();
        if filtered.is_empty() {
            out.push_str(&view::empty_state(
                "components",
                components.machine_filter.is_some(),
            ));
        } else {
            for component in filtered {
                out.push_str(&view::component_card(component));
            }
        }
        out
    });

    // Drill into the first machine, the way following a card link would.
    if let Some(first) = machines.machines().first() {
        let mut detail = MachineDetailPage::new();
        detail
            .load(&first.id, &state.machines, &state.components)
            .await;
        render_page("machine detail", detail.state(), || {
            let mut out = String::from("Machine Detail\n");
            if let Some(machine) = detail.machine() {
                out.push_str(&view::machine_card(machine));
            }
            if detail.components().is_empty() {
                out.push_str(&view::empty_state("components", false));
            } else {
                for component in detail.components() {
                    out.push_str(&view::component_card(component));
                }
            }
            out
        });
    }
}

fn render_page(name: &str, state: &LoadState, render: impl FnOnce() -> String) {
    match state {
        LoadState::Ready => println!("{}", render()),
        LoadState::Error(message) => eprintln!("Error loading {}: {}", name, message),
        LoadState::Loading => {}
    }
}
