use desk_core::{
    ManualClock, RequestStore, StoreBuilder, TransitionPolicy,
    models::{Priority, RequestCategory},
    params::CreateRequest,
};

/// Helper function to create a store on a frozen clock
pub fn create_test_store(policy: TransitionPolicy) -> (ManualClock, RequestStore) {
    let clock = ManualClock::at_second(1_704_067_200);
    let store = StoreBuilder::new()
        .with_transition_policy(policy)
        .with_clock(clock.clone())
        .build();
    (clock, store)
}

/// Helper function to build a valid submission form
pub fn sample_request(title: &str) -> CreateRequest {
    CreateRequest {
        title: title.to_string(),
        description: format!("Details for {title}"),
        category: RequestCategory::EquipmentRequest,
        priority: Priority::High,
        requester_name: "Ana".to_string(),
        requester_email: "ana@x.com".to_string(),
        department: "IT".to_string(),
    }
}
