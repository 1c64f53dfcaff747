// Integration tests for the resource façades using wiremock.
#![allow(clippy::unwrap_used)]

use std::time::Duration;

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{any, body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sigfox_api::models::{
    CoverageBulkRequest, CoverageLocation, DeviceCreate, DeviceTypeCreate, DeviceTypeUpdate,
    DeviceUpdate, GroupCreate, UserCreate,
};
use sigfox_api::{
    ApiUserListFilter, BaseStationMessageFilter, CallbackFilter, ContractDevicesFilter,
    ContractInfoListFilter, DetailOptions, DeviceListFilter, DeviceSituation, DeviceTypeListFilter,
    Error, GeolocFilter, GroupListFilter, MessageFilter, PredictionQuery, RedundancyQuery, Sigfox,
    UserListFilter,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Sigfox) {
    let server = MockServer::start().await;
    let sigfox = Sigfox::new(
        "login",
        SecretString::from("secret"),
        &server.uri(),
        Duration::from_secs(5),
    )
    .unwrap();
    (server, sigfox)
}

// ── Devices ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_devices_empty_page() {
    let (server, sigfox) = setup().await;

    Mock::given(method("GET"))
        .and(path("/devices/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": [], "paging": {} })),
        )
        .mount(&server)
        .await;

    let devices = sigfox
        .devices()
        .list(&DeviceListFilter::default())
        .await
        .unwrap();
    assert!(devices.is_empty());
}

#[tokio::test]
async fn test_list_devices_sends_joined_group_ids() {
    let (server, sigfox) = setup().await;

    Mock::given(method("GET"))
        .and(path("/devices/"))
        .and(query_param("groupIds", "a,b"))
        .and(query_param("limit", "10"))
        .and(query_param_is_missing("deep"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "id": "1A2B3C", "name": "Tracker", "state": 0, "comState": 1, "lastCom": 1_700_000_000_000_i64 },
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filter = DeviceListFilter {
        limit: Some(10),
        group_ids: vec!["a".into(), "b".into()],
        ..DeviceListFilter::default()
    };
    let devices = sigfox.devices().list(&filter).await.unwrap();

    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].id, "1A2B3C");
    assert_eq!(devices[0].name.as_deref(), Some("Tracker"));
    assert_eq!(devices[0].com_state, Some(1));
    assert_eq!(devices[0].last_com, Some(1_700_000_000_000));
}

#[tokio::test]
async fn test_list_devices_deep_flag() {
    let (server, sigfox) = setup().await;

    Mock::given(method("GET"))
        .and(path("/devices/"))
        .and(query_param("deep", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let filter = DeviceListFilter {
        deep: true,
        ..DeviceListFilter::default()
    };
    sigfox.devices().list(&filter).await.unwrap();
}

#[tokio::test]
async fn test_get_device_keeps_unknown_fields() {
    let (server, sigfox) = setup().await;

    Mock::given(method("GET"))
        .and(path("/devices/1A2B3C"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1A2B3C",
            "name": "Tracker",
            "deviceType": { "id": "dt-1", "name": "Generic" },
            "modemCertificate": { "id": "mc-1" }
        })))
        .expect(2)
        .mount(&server)
        .await;

    let first = sigfox.devices().get("1A2B3C").await.unwrap();
    let second = sigfox.devices().get("1A2B3C").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(
        first.device_type.as_ref().and_then(|t| t.id.as_deref()),
        Some("dt-1")
    );
    assert!(first.extra.contains_key("modemCertificate"));
}

#[tokio::test]
async fn test_get_device_blank_id_sends_nothing() {
    let (server, sigfox) = setup().await;

    let err = sigfox.devices().get("  ").await.unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_device_id_cannot_leave_its_segment() {
    let (server, sigfox) = setup().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    sigfox.devices().delete("../groups/root").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/devices/..%2Fgroups%2Froot");
}

#[tokio::test]
async fn test_get_user_id_cannot_inject_query() {
    let (server, sigfox) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users/abc%3Ffields%3Dsecret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "abc?fields=secret" })))
        .expect(1)
        .mount(&server)
        .await;

    let user = sigfox
        .users()
        .get("abc?fields=secret", &DetailOptions::default())
        .await
        .unwrap();
    assert_eq!(user.id, "abc?fields=secret");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_dot_segment_ids_send_nothing() {
    let (server, sigfox) = setup().await;

    let err = sigfox.devices().get("..").await.unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
    let err = sigfox
        .users()
        .remove_role("5f00aa", ".")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_device_twice_returns_identical_records() {
    let (server, sigfox) = setup().await;

    Mock::given(method("GET"))
        .and(path("/devices/1A2B3C"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1A2B3C",
            "name": "Tracker",
            "sequenceNumber": 12,
            "deviceType": { "id": "dt-1" },
            "vendorField": "kept"
        })))
        .expect(2)
        .mount(&server)
        .await;

    let first = sigfox.devices().get("1A2B3C").await.unwrap();
    let second = sigfox.devices().get("1A2B3C").await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.name.as_deref(), Some("Tracker"));
}

#[tokio::test]
async fn test_create_device_posts_wire_names() {
    let (server, sigfox) = setup().await;

    Mock::given(method("POST"))
        .and(path("/devices/"))
        .and(body_json(json!({
            "id": "1A2B3C",
            "name": "Tracker",
            "deviceTypeId": "dt-1",
            "pac": "ABCDEF0123456789",
            "prototype": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "1A2B3C" })))
        .expect(1)
        .mount(&server)
        .await;

    let payload = DeviceCreate {
        prototype: Some(true),
        ..DeviceCreate::new("1A2B3C", "Tracker", "dt-1", "ABCDEF0123456789")
    };
    let device = sigfox.devices().create(&payload).await.unwrap();
    assert_eq!(device.id, "1A2B3C");
    assert_eq!(device.name, None);
}

#[tokio::test]
async fn test_create_and_fetch_device() {
    let (server, sigfox) = setup().await;

    Mock::given(method("POST"))
        .and(path("/devices/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "1A2B3C" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/devices/1A2B3C"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1A2B3C",
            "name": "Tracker",
            "state": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let payload = DeviceCreate::new("1A2B3C", "Tracker", "dt-1", "ABCDEF0123456789");
    let device = sigfox.devices().create_and_fetch(&payload).await.unwrap();
    assert_eq!(device.name.as_deref(), Some("Tracker"));
    assert_eq!(device.state, Some(0));
}

#[tokio::test]
async fn test_update_device_sends_only_set_fields() {
    let (server, sigfox) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/devices/1A2B3C"))
        .and(body_json(json!({ "name": "Renamed" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let update = DeviceUpdate {
        name: Some("Renamed".into()),
        ..DeviceUpdate::default()
    };
    sigfox.devices().update("1A2B3C", &update).await.unwrap();
}

#[tokio::test]
async fn test_delete_missing_device_is_not_found() {
    let (server, sigfox) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/devices/FFFF"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Unknown device" })))
        .mount(&server)
        .await;

    let err = sigfox.devices().delete("FFFF").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_device_messages_with_time_window() {
    let (server, sigfox) = setup().await;

    Mock::given(method("GET"))
        .and(path("/devices/1A2B3C/messages"))
        .and(query_param("since", "1700000000000"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "time": 1_700_000_100_000_i64, "data": "cafe", "seqNumber": 42, "lqi": 3 }
            ]
        })))
        .mount(&server)
        .await;

    let filter = MessageFilter {
        since: Some(1_700_000_000_000),
        limit: Some(5),
        ..MessageFilter::default()
    };
    let messages = sigfox.devices().messages("1A2B3C", &filter).await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].data.as_deref(), Some("cafe"));
    assert_eq!(messages[0].seq_number, Some(42));
}

// ── Groups ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_group_returns_id() {
    let (server, sigfox) = setup().await;

    Mock::given(method("POST"))
        .and(path("/groups/"))
        .and(body_json(json!({
            "name": "Fleet",
            "description": "Delivery vans",
            "type": 2,
            "timezone": "Europe/Paris",
            "parentId": "root-group"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "g-42" })))
        .mount(&server)
        .await;

    let payload = GroupCreate {
        name: "Fleet".into(),
        description: "Delivery vans".into(),
        group_type: 2,
        timezone: "Europe/Paris".into(),
        parent_id: "root-group".into(),
        technical_email: None,
        account_id: None,
        network_operator_id: None,
        country_iso_alpha3: None,
        billable: None,
        max_prototype_allowed: None,
    };
    let created = sigfox.groups().create(&payload).await.unwrap();
    assert_eq!(created.id, "g-42");
}

#[tokio::test]
async fn test_list_all_groups_follows_pages() {
    let (server, sigfox) = setup().await;

    Mock::given(method("GET"))
        .and(path("/groups/"))
        .and(query_param("offset", "0"))
        .and(query_param("types", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": "g1", "type": 2 }],
            "paging": { "next": "https://api.sigfox.com/v2/groups/?offset=1" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/groups/"))
        .and(query_param("offset", "1"))
        .and(query_param("types", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": "g2", "type": 2 }],
            "paging": {}
        })))
        .mount(&server)
        .await;

    let filter = GroupListFilter {
        limit: Some(1),
        types: vec![2],
        ..GroupListFilter::default()
    };
    let groups = sigfox.groups().list_all(&filter, None).await.unwrap();
    let ids: Vec<_> = groups.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, ["g1", "g2"]);
}

#[tokio::test]
async fn test_get_group_with_authorizations() {
    let (server, sigfox) = setup().await;

    Mock::given(method("GET"))
        .and(path("/groups/g1"))
        .and(query_param("authorizations", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "g1",
            "name": "Root",
            "actions": ["group:read"]
        })))
        .mount(&server)
        .await;

    let options = DetailOptions {
        authorizations: true,
        ..DetailOptions::default()
    };
    let group = sigfox.groups().get("g1", &options).await.unwrap();
    assert_eq!(group.actions, Some(vec!["group:read".to_owned()]));
}

// ── Users & API users ───────────────────────────────────────────────

#[tokio::test]
async fn test_create_user_and_add_roles() {
    let (server, sigfox) = setup().await;

    Mock::given(method("POST"))
        .and(path("/users/"))
        .and(body_json(json!({
            "groupId": "g1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "timezone": "Europe/London",
            "roleIds": ["r1"]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "u1" })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/users/u1/roles"))
        .and(body_json(json!({ "roleIds": ["r2", "r3"] })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let payload = UserCreate {
        group_id: "g1".into(),
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        timezone: "Europe/London".into(),
        role_ids: vec!["r1".into()],
    };
    let created = sigfox.users().create(&payload).await.unwrap();
    sigfox
        .users()
        .add_roles(&created.id, &["r2".into(), "r3".into()])
        .await
        .unwrap();
}

#[tokio::test]
async fn test_remove_role_path() {
    let (server, sigfox) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/users/u1/roles/r2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    sigfox.users().remove_role("u1", "r2").await.unwrap();
}

#[tokio::test]
async fn test_renew_api_user_credential() {
    let (server, sigfox) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api-users/au1/renew-credential"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "accessToken": "fresh-secret" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let renewed = sigfox.api_users().renew_credential("au1").await.unwrap();
    assert_eq!(renewed.access_token.as_deref(), Some("fresh-secret"));
}

#[tokio::test]
async fn test_add_api_user_profiles_body() {
    let (server, sigfox) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api-users/au1/profiles"))
        .and(body_json(json!({ "profileIds": ["p1"] })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    sigfox
        .api_users()
        .add_profiles("au1", &["p1".into()])
        .await
        .unwrap();
}

// ── Contract infos ──────────────────────────────────────────────────

#[tokio::test]
async fn test_contract_devices_are_raw_objects() {
    let (server, sigfox) = setup().await;

    Mock::given(method("GET"))
        .and(path("/contract-infos/c1/devices"))
        .and(query_param("deviceTypeId", "dt-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": "1A", "token": { "state": 1 } }, "stray"]
        })))
        .mount(&server)
        .await;

    let filter = ContractDevicesFilter {
        device_type_id: Some("dt-1".into()),
        ..ContractDevicesFilter::default()
    };
    let devices = sigfox
        .contract_infos()
        .list_devices("c1", &filter)
        .await
        .unwrap();
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0]["token"]["state"], json!(1));
}

// ── Coverages ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_global_prediction() {
    let (server, sigfox) = setup().await;

    Mock::given(method("GET"))
        .and(path("/coverages/global/predictions"))
        .and(query_param("lat", "43.5"))
        .and(query_param("lng", "1.5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "locationCovered": true,
            "margins": [40, 20, 5]
        })))
        .mount(&server)
        .await;

    let prediction = sigfox
        .coverages()
        .global_prediction(&PredictionQuery::new(43.5, 1.5))
        .await
        .unwrap();
    assert_eq!(prediction.location_covered, Some(true));
    assert_eq!(prediction.margins, Some(vec![40, 20, 5]));
}

#[tokio::test]
async fn test_bulk_prediction_pending_then_done() {
    let (server, sigfox) = setup().await;

    Mock::given(method("POST"))
        .and(path("/coverages/global/predictions/bulk"))
        .and(body_json(json!({ "locations": [{ "lat": 43.5, "lng": 1.5 }] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "jobId": "job-1" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/coverages/global/predictions/bulk/job-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "jobDone": false })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/coverages/global/predictions/bulk/job-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobDone": true,
            "time": 1_700_000_000_000_i64,
            "results": [{ "lat": 43.5, "lng": 1.5, "locationCovered": true, "margins": [30, 10, 0] }]
        })))
        .mount(&server)
        .await;

    let request = CoverageBulkRequest {
        locations: vec![CoverageLocation { lat: 43.5, lng: 1.5 }],
        radius: None,
        group_id: None,
    };
    let job = sigfox
        .coverages()
        .start_bulk_prediction(&request)
        .await
        .unwrap();
    assert_eq!(job.job_id, "job-1");

    let pending = sigfox
        .coverages()
        .get_bulk_prediction(&job.job_id)
        .await
        .unwrap();
    assert!(!pending.is_done());
    assert!(pending.results.is_none());

    let done = sigfox
        .coverages()
        .get_bulk_prediction(&job.job_id)
        .await
        .unwrap();
    assert!(done.is_done());
    assert_eq!(done.results.unwrap().len(), 1);
}

#[tokio::test]
async fn test_bulk_prediction_without_locations_is_rejected() {
    let (server, sigfox) = setup().await;

    let request = CoverageBulkRequest {
        locations: Vec::new(),
        radius: Some(500),
        group_id: None,
    };
    let err = sigfox
        .coverages()
        .start_bulk_prediction(&request)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_operator_redundancy_query() {
    let (server, sigfox) = setup().await;

    Mock::given(method("GET"))
        .and(path("/coverages/operators/redundancy"))
        .and(query_param("lat", "48.86"))
        .and(query_param("lng", "2.35"))
        .and(query_param("deviceSituation", "INDOOR"))
        .and(query_param("deviceClassId", "0"))
        .and(query_param_is_missing("operatorId"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "redundancy": 3 })))
        .expect(1)
        .mount(&server)
        .await;

    let query = RedundancyQuery {
        device_situation: Some(DeviceSituation::Indoor),
        device_class_id: Some(0),
        ..RedundancyQuery::new(48.86, 2.35)
    };
    let redundancy = sigfox
        .coverages()
        .operator_redundancy(&query)
        .await
        .unwrap();
    assert_eq!(redundancy.redundancy, Some(3));
}

// ── Device types ────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_device_types_by_contract() {
    let (server, sigfox) = setup().await;

    Mock::given(method("GET"))
        .and(path("/device-types/"))
        .and(query_param("contractId", "c-9"))
        .and(query_param("name", "Tracker"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": "dt-1", "name": "Tracker", "keepAlive": 3600, "payloadType": 2 }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filter = DeviceTypeListFilter {
        name: Some("Tracker".into()),
        contract_id: Some("c-9".into()),
        ..DeviceTypeListFilter::default()
    };
    let types = sigfox.device_types().list(&filter).await.unwrap();
    assert_eq!(types.len(), 1);
    assert_eq!(types[0].keep_alive, Some(3600));
    assert_eq!(types[0].payload_type, Some(2));
}

#[tokio::test]
async fn test_create_device_type_returns_record() {
    let (server, sigfox) = setup().await;

    Mock::given(method("POST"))
        .and(path("/device-types/"))
        .and(body_json(json!({
            "name": "Tracker",
            "groupId": "g-1",
            "contractId": "c-9",
            "keepAlive": 0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "dt-1" })))
        .expect(1)
        .mount(&server)
        .await;

    let payload = DeviceTypeCreate {
        contract_id: Some("c-9".into()),
        keep_alive: Some(0),
        ..DeviceTypeCreate::new("Tracker", "g-1")
    };
    let created = sigfox.device_types().create(&payload).await.unwrap();
    assert_eq!(created.id, "dt-1");
    assert!(created.name.is_none());
}

#[tokio::test]
async fn test_update_device_type_sends_only_set_fields() {
    let (server, sigfox) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/device-types/dt-1"))
        .and(body_json(json!({ "alertEmail": "ops@example.com" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let update = DeviceTypeUpdate {
        alert_email: Some("ops@example.com".into()),
        ..DeviceTypeUpdate::default()
    };
    sigfox
        .device_types()
        .update("dt-1", &update)
        .await
        .unwrap();
}

// ── Base stations ───────────────────────────────────────────────────

#[tokio::test]
async fn test_base_station_messages() {
    let (server, sigfox) = setup().await;

    Mock::given(method("GET"))
        .and(path("/base-stations/BS01/messages"))
        .and(query_param("since", "1700000000000"))
        .and(query_param("fields", "device(name)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "device": { "id": "1A2B3C", "name": "Tracker" },
                "time": 1_700_000_000_500_i64,
                "data": "cafe",
                "seqNumber": 12
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filter = BaseStationMessageFilter {
        fields: Some("device(name)".into()),
        since: Some(1_700_000_000_000),
        ..BaseStationMessageFilter::default()
    };
    let messages = sigfox
        .base_stations()
        .list_messages("BS01", &filter)
        .await
        .unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].data.as_deref(), Some("cafe"));
    assert_eq!(
        messages[0].device.as_ref().and_then(|d| d.name.as_deref()),
        Some("Tracker")
    );
}

// ── Contracts and group sub-resources ───────────────────────────────

#[tokio::test]
async fn test_list_contracts_with_flags() {
    let (server, sigfox) = setup().await;

    Mock::given(method("GET"))
        .and(path("/contract-infos/"))
        .and(query_param("groupId", "g-1"))
        .and(query_param("up", "true"))
        .and(query_param("pricingModel", "2"))
        .and(query_param_is_missing("deep"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": "c-1", "maxTokens": 100, "tokensInUse": 42 }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filter = ContractInfoListFilter {
        group_id: Some("g-1".into()),
        up: true,
        pricing_model: Some(2),
        ..ContractInfoListFilter::default()
    };
    let contracts = sigfox.contract_infos().list(&filter).await.unwrap();
    assert_eq!(contracts[0].max_tokens, Some(100));
    assert_eq!(contracts[0].tokens_in_use, Some(42));
}

#[tokio::test]
async fn test_group_callbacks_and_geoloc_payloads() {
    let (server, sigfox) = setup().await;

    Mock::given(method("GET"))
        .and(path("/groups/g-1/callbacks-not-delivered"))
        .and(query_param("before", "1700000000000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "device": "1A2B3C", "status": "500", "message": "upstream down" }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/groups/g-1/geoloc-payloads"))
        .and(query_param("pageId", "p2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": "gp-1", "name": "Wifi" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let callbacks = sigfox
        .groups()
        .callbacks_not_delivered(
            "g-1",
            &CallbackFilter {
                before: Some(1_700_000_000_000),
                ..CallbackFilter::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(callbacks[0].message.as_deref(), Some("upstream down"));

    let payloads = sigfox
        .groups()
        .geoloc_payloads(
            "g-1",
            &GeolocFilter {
                page_id: Some("p2".into()),
                ..GeolocFilter::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(payloads[0].name.as_deref(), Some("Wifi"));
}

// ── Every façade: empty pages and error statuses ────────────────────

/// Run one list façade by name and return how many records it decoded.
async fn list_len(sigfox: &Sigfox, name: &str) -> Result<usize, Error> {
    let n = match name {
        "devices" => sigfox.devices().list(&DeviceListFilter::default()).await?.len(),
        "device messages" => sigfox
            .devices()
            .messages("1A2B3C", &MessageFilter::default())
            .await?
            .len(),
        "device types" => sigfox
            .device_types()
            .list(&DeviceTypeListFilter::default())
            .await?
            .len(),
        "groups" => sigfox.groups().list(&GroupListFilter::default()).await?.len(),
        "group callbacks" => sigfox
            .groups()
            .callbacks_not_delivered("g1", &CallbackFilter::default())
            .await?
            .len(),
        "group geoloc payloads" => sigfox
            .groups()
            .geoloc_payloads("g1", &GeolocFilter::default())
            .await?
            .len(),
        "users" => sigfox.users().list(&UserListFilter::default()).await?.len(),
        "api users" => sigfox
            .api_users()
            .list(&ApiUserListFilter::default())
            .await?
            .len(),
        "contracts" => sigfox
            .contract_infos()
            .list(&ContractInfoListFilter::default())
            .await?
            .len(),
        "contract devices" => sigfox
            .contract_infos()
            .list_devices("c1", &ContractDevicesFilter::default())
            .await?
            .len(),
        "base station messages" => sigfox
            .base_stations()
            .list_messages("bs1", &BaseStationMessageFilter::default())
            .await?
            .len(),
        other => panic!("unknown list {other}"),
    };
    Ok(n)
}

/// Run one get façade by name, discarding the record.
async fn get_one(sigfox: &Sigfox, name: &str) -> Result<(), Error> {
    let detail = DetailOptions::default();
    match name {
        "device" => sigfox.devices().get("1A2B3C").await.map(drop),
        "device type" => sigfox.device_types().get("dt-1").await.map(drop),
        "group" => sigfox.groups().get("g1", &detail).await.map(drop),
        "user" => sigfox.users().get("u1", &detail).await.map(drop),
        "api user" => sigfox.api_users().get("a1", &detail).await.map(drop),
        "contract" => sigfox.contract_infos().get("c1", &detail).await.map(drop),
        "bulk prediction" => sigfox.coverages().get_bulk_prediction("job-1").await.map(drop),
        other => panic!("unknown get {other}"),
    }
}

const LISTS: &[(&str, &str)] = &[
    ("devices", "/devices/"),
    ("device messages", "/devices/1A2B3C/messages"),
    ("device types", "/device-types/"),
    ("groups", "/groups/"),
    ("group callbacks", "/groups/g1/callbacks-not-delivered"),
    ("group geoloc payloads", "/groups/g1/geoloc-payloads"),
    ("users", "/users/"),
    ("api users", "/api-users/"),
    ("contracts", "/contract-infos/"),
    ("contract devices", "/contract-infos/c1/devices"),
    ("base station messages", "/base-stations/bs1/messages"),
];

const GETS: &[&str] = &[
    "device",
    "device type",
    "group",
    "user",
    "api user",
    "contract",
    "bulk prediction",
];

#[tokio::test]
async fn test_every_list_accepts_empty_page() {
    for &(name, list_path) in LISTS {
        let (server, sigfox) = setup().await;
        Mock::given(method("GET"))
            .and(path(list_path))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let n = list_len(&sigfox, name)
            .await
            .unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(n, 0, "{name}");
    }
}

#[tokio::test]
async fn test_every_get_classifies_error_statuses() {
    for &name in GETS {
        for status in [401_u16, 403, 404, 500] {
            let (server, sigfox) = setup().await;
            Mock::given(any())
                .respond_with(
                    ResponseTemplate::new(status).set_body_json(json!({ "message": "nope" })),
                )
                .expect(1)
                .mount(&server)
                .await;

            let err = get_one(&sigfox, name).await.unwrap_err();
            assert_eq!(err.status(), Some(status), "{name} {status}");
            let kind_ok = match status {
                401 => matches!(err, Error::Authentication { .. }),
                403 => matches!(err, Error::Authorization { .. }),
                404 => matches!(err, Error::NotFound { .. }),
                _ => matches!(err, Error::Api { status: 500, .. }),
            };
            assert!(kind_ok, "{name} {status}: {err:?}");
        }
    }
}
