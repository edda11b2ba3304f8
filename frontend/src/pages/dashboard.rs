use yew::prelude::*;

/// Shell for the supervisor dashboard. The page keeps its own document
/// title; the unread badge in the navigation still updates.
#[function_component(SupervisorDashboard)]
pub fn supervisor_dashboard() -> Html {
    html! {
        <main class="dashboard-page" dir="rtl">
            <h1>{"لوحة المشرف"}</h1>
            <p>{"الرسائل الجديدة تظهر في شارة التنبيهات أعلى الصفحة."}</p>
        </main>
    }
}
