// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The messages and enums used by the Cloud Memorystore for Memcached API.

use std::collections::HashMap;

/// Defines an enum with its proto names and values.
///
/// The enum serializes using the value names, deserializes from names or
/// values, and preserves values unknown to this version of the library.
macro_rules! proto_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($full_name:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal => $proto_name:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        #[non_exhaustive]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value not known to this version of the library.
            ///
            /// Use [value][Self::value] or [name][Self::name] to inspect it.
            UnknownValue($crate::model::UnknownValue),
        }

        impl $name {
            /// The numeric value, if known.
            pub fn value(&self) -> Option<i32> {
                match self {
                    $(Self::$variant => Some($value),)+
                    Self::UnknownValue(u) => u.0.value(),
                }
            }

            /// The value name, if known.
            pub fn name(&self) -> Option<&str> {
                match self {
                    $(Self::$variant => Some($proto_name),)+
                    Self::UnknownValue(u) => u.0.name(),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::from(0)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                wkt::internal::display_enum(f, self.name(), self.value())
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                match value {
                    $($value => Self::$variant,)+
                    v => Self::UnknownValue($crate::model::UnknownValue(
                        wkt::internal::UnknownEnumValue::Integer(v),
                    )),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($proto_name => Self::$variant,)+
                    n => Self::UnknownValue($crate::model::UnknownValue(
                        wkt::internal::UnknownEnumValue::String(n.to_string()),
                    )),
                }
            }
        }

        impl serde::ser::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                match self {
                    Self::UnknownValue(u) => serde::ser::Serialize::serialize(&u.0, serializer),
                    known => serializer.serialize_str(known.name().unwrap_or_default()),
                }
            }
        }

        impl<'de> serde::de::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                deserializer.deserialize_any(wkt::internal::EnumVisitor::<Self>::new($full_name))
            }
        }
    };
}

/// Holds an enum value not known to this version of the library.
#[derive(Clone, Debug, PartialEq)]
pub struct UnknownValue(wkt::internal::UnknownEnumValue);

/// A Memorystore for Memcached instance.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Instance {
    /// Required. Unique name of the resource in this scope including project and
    /// location using the form:
    /// `projects/{project_id}/locations/{location_id}/instances/{instance_id}`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// User provided name for the instance, which is only used for display
    /// purposes. Cannot be more than 80 characters.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub display_name: String,

    /// Resource labels to represent user-provided metadata.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,

    /// The full name of the Google Compute Engine
    /// [network](https://cloud.google.com/vpc/docs/vpc) to which the
    /// instance is connected. If left unspecified, the `default` network
    /// will be used.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub authorized_network: String,

    /// Zones in which Memcached nodes should be provisioned. If not provided,
    /// the service will by default create nodes in all zones in the region.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub zones: Vec<String>,

    /// Required. Number of nodes in the Memcached instance.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub node_count: i32,

    /// Required. Configuration for Memcached nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_config: Option<instance::NodeConfig>,

    /// The major version of Memcached software.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub memcache_version: MemcacheVersion,

    /// Optional: User defined parameters to apply to the memcached process
    /// on each node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<MemcacheParameters>,

    /// Output only. List of Memcached nodes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub memcache_nodes: Vec<instance::Node>,

    /// Output only. The time the instance was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<wkt::Timestamp>,

    /// Output only. The time the instance was updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<wkt::Timestamp>,

    /// Output only. The state of this Memcached instance.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub state: instance::State,

    /// Output only. The full version of memcached server running on this instance.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub memcache_full_version: String,

    /// List of messages that describe the current state of the Memcached
    /// instance.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instance_messages: Vec<instance::InstanceMessage>,

    /// Output only. Endpoint for the Discovery API.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub discovery_endpoint: String,
}

impl Instance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Instance::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][Instance::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [labels][Instance::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [authorized_network][Instance::authorized_network].
    pub fn set_authorized_network<T: Into<String>>(mut self, v: T) -> Self {
        self.authorized_network = v.into();
        self
    }

    /// Sets the value of [zones][Instance::zones].
    pub fn set_zones<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.zones = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [node_count][Instance::node_count].
    pub fn set_node_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.node_count = v.into();
        self
    }

    /// Sets the value of [node_config][Instance::node_config].
    pub fn set_node_config<T: Into<instance::NodeConfig>>(mut self, v: T) -> Self {
        self.node_config = Some(v.into());
        self
    }

    /// Sets the value of [memcache_version][Instance::memcache_version].
    pub fn set_memcache_version<T: Into<MemcacheVersion>>(mut self, v: T) -> Self {
        self.memcache_version = v.into();
        self
    }

    /// Sets the value of [parameters][Instance::parameters].
    pub fn set_parameters<T: Into<MemcacheParameters>>(mut self, v: T) -> Self {
        self.parameters = Some(v.into());
        self
    }

    /// Sets the value of [memcache_nodes][Instance::memcache_nodes].
    pub fn set_memcache_nodes<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<instance::Node>,
    {
        self.memcache_nodes = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [create_time][Instance::create_time].
    pub fn set_create_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    /// Sets the value of [update_time][Instance::update_time].
    pub fn set_update_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.update_time = Some(v.into());
        self
    }

    /// Sets the value of [state][Instance::state].
    pub fn set_state<T: Into<instance::State>>(mut self, v: T) -> Self {
        self.state = v.into();
        self
    }

    /// Sets the value of [memcache_full_version][Instance::memcache_full_version].
    pub fn set_memcache_full_version<T: Into<String>>(mut self, v: T) -> Self {
        self.memcache_full_version = v.into();
        self
    }

    /// Sets the value of [instance_messages][Instance::instance_messages].
    pub fn set_instance_messages<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<instance::InstanceMessage>,
    {
        self.instance_messages = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [discovery_endpoint][Instance::discovery_endpoint].
    pub fn set_discovery_endpoint<T: Into<String>>(mut self, v: T) -> Self {
        self.discovery_endpoint = v.into();
        self
    }
}

impl wkt::message::Message for Instance {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.memcache.v1.Instance"
    }
}

/// Defines types nested in [Instance].
pub mod instance {
    use super::*;

    /// Configuration for a Memcached Node.
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct NodeConfig {
        /// Required. Number of cpus per Memcached node.
        #[serde(skip_serializing_if = "wkt::internal::is_default")]
        pub cpu_count: i32,

        /// Required. Memory size in MiB for each Memcached node.
        #[serde(skip_serializing_if = "wkt::internal::is_default")]
        pub memory_size_mb: i32,
    }

    impl NodeConfig {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of [cpu_count][NodeConfig::cpu_count].
        pub fn set_cpu_count<T: Into<i32>>(mut self, v: T) -> Self {
            self.cpu_count = v.into();
            self
        }

        /// Sets the value of [memory_size_mb][NodeConfig::memory_size_mb].
        pub fn set_memory_size_mb<T: Into<i32>>(mut self, v: T) -> Self {
            self.memory_size_mb = v.into();
            self
        }
    }

    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Node {
        /// Output only. Identifier of the Memcached node. The node id does not
        /// include project or location like the Memcached instance name.
        #[serde(skip_serializing_if = "String::is_empty")]
        pub node_id: String,

        /// Output only. Location (GCP Zone) for the Memcached node.
        #[serde(skip_serializing_if = "String::is_empty")]
        pub zone: String,

        /// Output only. Current state of the Memcached node.
        #[serde(skip_serializing_if = "wkt::internal::is_default")]
        pub state: node::State,

        /// Output only. Hostname or IP address of the Memcached node used by the
        /// clients to connect to the Memcached server on this node.
        #[serde(skip_serializing_if = "String::is_empty")]
        pub host: String,

        /// Output only. The port number of the Memcached server on this node.
        #[serde(skip_serializing_if = "wkt::internal::is_default")]
        pub port: i32,

        /// User defined parameters currently applied to the node.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub parameters: Option<MemcacheParameters>,
    }

    impl Node {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of [node_id][Node::node_id].
        pub fn set_node_id<T: Into<String>>(mut self, v: T) -> Self {
            self.node_id = v.into();
            self
        }

        /// Sets the value of [zone][Node::zone].
        pub fn set_zone<T: Into<String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }

        /// Sets the value of [state][Node::state].
        pub fn set_state<T: Into<node::State>>(mut self, v: T) -> Self {
            self.state = v.into();
            self
        }

        /// Sets the value of [host][Node::host].
        pub fn set_host<T: Into<String>>(mut self, v: T) -> Self {
            self.host = v.into();
            self
        }

        /// Sets the value of [port][Node::port].
        pub fn set_port<T: Into<i32>>(mut self, v: T) -> Self {
            self.port = v.into();
            self
        }

        /// Sets the value of [parameters][Node::parameters].
        pub fn set_parameters<T: Into<MemcacheParameters>>(mut self, v: T) -> Self {
            self.parameters = Some(v.into());
            self
        }
    }

    /// Defines types nested in [Node].
    pub mod node {
        proto_enum! {
            /// Different states of a Memcached node.
            pub enum State (".google.cloud.memcache.v1.Instance.Node.State") {
                /// Node state is not set.
                Unspecified = 0 => "STATE_UNSPECIFIED",
                /// Node is being created.
                Creating = 1 => "CREATING",
                /// Node has been created and ready to be used.
                Ready = 2 => "READY",
                /// Node is being deleted.
                Deleting = 3 => "DELETING",
                /// Node is being updated.
                Updating = 4 => "UPDATING",
            }
        }
    }

    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct InstanceMessage {
        /// A code that correspond to one type of user-facing message.
        #[serde(skip_serializing_if = "wkt::internal::is_default")]
        pub code: instance_message::Code,

        /// Message on memcached instance which will be exposed to users.
        #[serde(skip_serializing_if = "String::is_empty")]
        pub message: String,
    }

    impl InstanceMessage {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of [code][InstanceMessage::code].
        pub fn set_code<T: Into<instance_message::Code>>(mut self, v: T) -> Self {
            self.code = v.into();
            self
        }

        /// Sets the value of [message][InstanceMessage::message].
        pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
            self.message = v.into();
            self
        }
    }

    /// Defines types nested in [InstanceMessage].
    pub mod instance_message {
        proto_enum! {
            pub enum Code (".google.cloud.memcache.v1.Instance.InstanceMessage.Code") {
                /// Message Code not set.
                Unspecified = 0 => "CODE_UNSPECIFIED",
                /// Memcached nodes are distributed unevenly.
                ZoneDistributionUnbalanced = 1 => "ZONE_DISTRIBUTION_UNBALANCED",
            }
        }
    }

    proto_enum! {
        /// Different states of a Memcached instance.
        pub enum State (".google.cloud.memcache.v1.Instance.State") {
            /// State not set.
            Unspecified = 0 => "STATE_UNSPECIFIED",
            /// Memcached instance is being created.
            Creating = 1 => "CREATING",
            /// Memcached instance has been created and ready to be used.
            Ready = 2 => "READY",
            /// Memcached instance is being deleted.
            Deleting = 4 => "DELETING",
            /// Memcached instance is going through maintenance, e.g. data plane
            /// rollout.
            PerformingMaintenance = 5 => "PERFORMING_MAINTENANCE",
        }
    }
}

/// Request for [ListInstances][crate::client::CloudMemcache::list_instances].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListInstancesRequest {
    /// Required. The resource name of the instance location using the form:
    /// `projects/{project_id}/locations/{location_id}`
    /// where `location_id` refers to a GCP region
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parent: String,

    /// The maximum number of items to return.
    ///
    /// If not specified, a default value of 1000 will be used by the service.
    /// Regardless of the page_size value, the response may include a partial list
    /// and a caller should only rely on response's
    /// [next_page_token][ListInstancesResponse::next_page_token]
    /// to determine if there are more instances left to be queried.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    /// The next_page_token value returned from a previous List request, if any.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub page_token: String,

    /// List filter. For example, exclude all Memcached instances with name as
    /// my-instance by specifying `"name != my-instance"`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub filter: String,

    /// Sort results. Supported values are "name", "name desc" or "" (unsorted).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub order_by: String,
}

impl ListInstancesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [parent][ListInstancesRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_size][ListInstancesRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][ListInstancesRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [filter][ListInstancesRequest::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [order_by][ListInstancesRequest::order_by].
    pub fn set_order_by<T: Into<String>>(mut self, v: T) -> Self {
        self.order_by = v.into();
        self
    }
}

/// Response for [ListInstances][crate::client::CloudMemcache::list_instances].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListInstancesResponse {
    /// A list of Memcached instances in the project in the specified location,
    /// or across all locations.
    ///
    /// If the `location_id` in the parent field of the request is "-", all regions
    /// available to the project are queried, and the results aggregated.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instances: Vec<Instance>,

    /// Token to retrieve the next page of results, or empty if there are no more
    /// results in the list.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,

    /// Locations that could not be reached.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unreachable: Vec<String>,
}

impl ListInstancesResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [instances][ListInstancesResponse::instances].
    pub fn set_instances<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Instance>,
    {
        self.instances = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][ListInstancesResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }

    /// Sets the value of [unreachable][ListInstancesResponse::unreachable].
    pub fn set_unreachable<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.unreachable = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl gax::paginator::PageableResponse for ListInstancesResponse {
    type PageItem = Instance;

    fn items(self) -> Vec<Self::PageItem> {
        self.instances
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// Request for [GetInstance][crate::client::CloudMemcache::get_instance].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetInstanceRequest {
    /// Required. Memcached instance resource name in the format:
    /// `projects/{project_id}/locations/{location_id}/instances/{instance_id}`
    /// where `location_id` refers to a GCP region
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl GetInstanceRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][GetInstanceRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// Request for [CreateInstance][crate::client::CloudMemcache::create_instance].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateInstanceRequest {
    /// Required. The resource name of the instance location using the form:
    /// `projects/{project_id}/locations/{location_id}`
    /// where `location_id` refers to a GCP region
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parent: String,

    /// Required. The logical name of the Memcached instance in the user
    /// project with the following restrictions:
    ///
    /// * Must contain only lowercase letters, numbers, and hyphens.
    /// * Must start with a letter.
    /// * Must be between 1-40 characters.
    /// * Must end with a number or a letter.
    /// * Must be unique within the user project / location.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub instance_id: String,

    /// Required. A Memcached [Instance] resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<Instance>,
}

impl CreateInstanceRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [parent][CreateInstanceRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [instance_id][CreateInstanceRequest::instance_id].
    pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_id = v.into();
        self
    }

    /// Sets the value of [instance][CreateInstanceRequest::instance].
    pub fn set_instance<T: Into<Instance>>(mut self, v: T) -> Self {
        self.instance = Some(v.into());
        self
    }
}

/// Request for [UpdateInstance][crate::client::CloudMemcache::update_instance].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateInstanceRequest {
    /// Required. Mask of fields to update.
    ///
    /// * `displayName`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_mask: Option<wkt::FieldMask>,

    /// Required. A Memcached [Instance] resource.
    /// Only fields specified in update_mask are updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<Instance>,
}

impl UpdateInstanceRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [update_mask][UpdateInstanceRequest::update_mask].
    pub fn set_update_mask<T: Into<wkt::FieldMask>>(mut self, v: T) -> Self {
        self.update_mask = Some(v.into());
        self
    }

    /// Sets the value of [instance][UpdateInstanceRequest::instance].
    pub fn set_instance<T: Into<Instance>>(mut self, v: T) -> Self {
        self.instance = Some(v.into());
        self
    }
}

/// Request for [DeleteInstance][crate::client::CloudMemcache::delete_instance].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteInstanceRequest {
    /// Required. Memcached instance resource name in the format:
    /// `projects/{project_id}/locations/{location_id}/instances/{instance_id}`
    /// where `location_id` refers to a GCP region
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl DeleteInstanceRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][DeleteInstanceRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// Request for [ApplyParameters][crate::client::CloudMemcache::apply_parameters].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ApplyParametersRequest {
    /// Required. Resource name of the Memcached instance for which parameter group updates
    /// should be applied.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Nodes to which the instance-level parameter group is applied.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub node_ids: Vec<String>,

    /// Whether to apply instance-level parameter group to all nodes. If set to
    /// true, users are restricted from specifying individual nodes, and
    /// `ApplyParameters` updates all nodes within the instance.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub apply_all: bool,
}

impl ApplyParametersRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][ApplyParametersRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [node_ids][ApplyParametersRequest::node_ids].
    pub fn set_node_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.node_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [apply_all][ApplyParametersRequest::apply_all].
    pub fn set_apply_all(mut self, v: bool) -> Self {
        self.apply_all = v;
        self
    }
}

/// Request for [UpdateParameters][crate::client::CloudMemcache::update_parameters].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateParametersRequest {
    /// Required. Resource name of the Memcached instance for which the parameters should be
    /// updated.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Required. Mask of fields to update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_mask: Option<wkt::FieldMask>,

    /// The parameters to apply to the instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<MemcacheParameters>,
}

impl UpdateParametersRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][UpdateParametersRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [update_mask][UpdateParametersRequest::update_mask].
    pub fn set_update_mask<T: Into<wkt::FieldMask>>(mut self, v: T) -> Self {
        self.update_mask = Some(v.into());
        self
    }

    /// Sets the value of [parameters][UpdateParametersRequest::parameters].
    pub fn set_parameters<T: Into<MemcacheParameters>>(mut self, v: T) -> Self {
        self.parameters = Some(v.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MemcacheParameters {
    /// Output only. The unique ID associated with this set of parameters. Users
    /// can use this id to determine if the parameters associated with the
    /// instance differ from the parameters associated with the nodes and any
    /// action needs to be taken to apply parameters on nodes.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// User defined set of parameters to use in the memcached process.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub params: HashMap<String, String>,
}

impl MemcacheParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [id][MemcacheParameters::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [params][MemcacheParameters::params].
    pub fn set_params<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.params = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// Represents the metadata of a long-running operation.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OperationMetadata {
    /// Output only. Time when the operation was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<wkt::Timestamp>,

    /// Output only. Time when the operation finished running.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<wkt::Timestamp>,

    /// Output only. Server-defined resource path for the target of the operation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target: String,

    /// Output only. Name of the verb executed by the operation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub verb: String,

    /// Output only. Human-readable status of the operation, if any.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status_detail: String,

    /// Output only. Identifies whether the user has requested cancellation
    /// of the operation. Operations that have successfully been cancelled
    /// have an `Operation.error` value with a `google.rpc.Status.code` of 1,
    /// corresponding to `Code.CANCELLED`.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub cancel_requested: bool,

    /// Output only. API version used to start the operation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_version: String,
}

impl OperationMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [create_time][OperationMetadata::create_time].
    pub fn set_create_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    /// Sets the value of [end_time][OperationMetadata::end_time].
    pub fn set_end_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.end_time = Some(v.into());
        self
    }

    /// Sets the value of [target][OperationMetadata::target].
    pub fn set_target<T: Into<String>>(mut self, v: T) -> Self {
        self.target = v.into();
        self
    }

    /// Sets the value of [verb][OperationMetadata::verb].
    pub fn set_verb<T: Into<String>>(mut self, v: T) -> Self {
        self.verb = v.into();
        self
    }

    /// Sets the value of [status_detail][OperationMetadata::status_detail].
    pub fn set_status_detail<T: Into<String>>(mut self, v: T) -> Self {
        self.status_detail = v.into();
        self
    }

    /// Sets the value of [cancel_requested][OperationMetadata::cancel_requested].
    pub fn set_cancel_requested(mut self, v: bool) -> Self {
        self.cancel_requested = v;
        self
    }

    /// Sets the value of [api_version][OperationMetadata::api_version].
    pub fn set_api_version<T: Into<String>>(mut self, v: T) -> Self {
        self.api_version = v.into();
        self
    }
}

impl wkt::message::Message for OperationMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.memcache.v1.OperationMetadata"
    }
}

/// Metadata for the given `google.cloud.location.Location`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LocationMetadata {
    /// Output only. The set of available zones in the location. The map is keyed
    /// by the lowercase ID of each zone, as defined by GCE. These keys can be
    /// specified in the `zones` field when creating a Memcached instance.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub available_zones: HashMap<String, ZoneMetadata>,
}

impl LocationMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [available_zones][LocationMetadata::available_zones].
    pub fn set_available_zones<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ZoneMetadata>,
    {
        self.available_zones = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

impl wkt::message::Message for LocationMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.memcache.v1.LocationMetadata"
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ZoneMetadata {}

impl ZoneMetadata {
    pub fn new() -> Self {
        Self::default()
    }
}

proto_enum! {
    /// Memcached versions supported by our service.
    pub enum MemcacheVersion (".google.cloud.memcache.v1.MemcacheVersion") {
        Unspecified = 0 => "MEMCACHE_VERSION_UNSPECIFIED",
        /// Memcached 1.5 version.
        Memcache15 = 1 => "MEMCACHE_1_5",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn instance_json() -> anyhow::Result<()> {
        let input = json!({
            "name": "projects/p/locations/us-central1/instances/cache",
            "displayName": "My Cache",
            "labels": {"env": "test"},
            "zones": ["us-central1-a", "us-central1-b"],
            "nodeCount": 2,
            "nodeConfig": {"cpuCount": 1, "memorySizeMb": 1024},
            "memcacheVersion": "MEMCACHE_1_5",
            "parameters": {"id": "p-1", "params": {"max-item-size": "2097152"}},
            "memcacheNodes": [{
                "nodeId": "node-a",
                "zone": "us-central1-a",
                "state": "READY",
                "host": "10.0.0.3",
                "port": 11211,
            }],
            "createTime": "2024-03-01T10:00:00Z",
            "state": "READY",
            "instanceMessages": [{
                "code": "ZONE_DISTRIBUTION_UNBALANCED",
                "message": "uneven",
            }],
            "discoveryEndpoint": "10.0.0.2:11211",
        });
        let got = serde_json::from_value::<Instance>(input.clone())?;
        assert_eq!(got.display_name, "My Cache");
        assert_eq!(got.labels.get("env").map(String::as_str), Some("test"));
        assert_eq!(got.node_count, 2);
        assert_eq!(
            got.node_config,
            Some(instance::NodeConfig::new().set_cpu_count(1).set_memory_size_mb(1024))
        );
        assert_eq!(got.memcache_version, MemcacheVersion::Memcache15);
        assert_eq!(got.state, instance::State::Ready);
        assert_eq!(got.memcache_nodes.len(), 1);
        assert_eq!(got.memcache_nodes[0].state, instance::node::State::Ready);
        assert_eq!(got.memcache_nodes[0].port, 11211);
        assert_eq!(
            got.instance_messages[0].code,
            instance::instance_message::Code::ZoneDistributionUnbalanced
        );
        assert_eq!(got.create_time.as_ref().map(|t| t.seconds()), Some(1709287200));
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn default_instance_is_empty() -> anyhow::Result<()> {
        let got = serde_json::to_value(Instance::new())?;
        assert_eq!(got, json!({}));
        let got = serde_json::from_value::<Instance>(json!({}))?;
        assert_eq!(got, Instance::default());
        assert_eq!(got.state, instance::State::Unspecified);
        Ok(())
    }

    #[test]
    fn unknown_fields_are_ignored() -> anyhow::Result<()> {
        let got = serde_json::from_value::<Instance>(json!({
            "name": "projects/p/locations/l/instances/i",
            "maintenancePolicy": {"description": "not in this version"},
            "updateAvailable": true,
        }))?;
        assert_eq!(got.name, "projects/p/locations/l/instances/i");
        Ok(())
    }

    #[test_case(json!("CREATING"), instance::State::Creating)]
    #[test_case(json!("DELETING"), instance::State::Deleting)]
    #[test_case(json!(4), instance::State::Deleting)]
    #[test_case(json!("PERFORMING_MAINTENANCE"), instance::State::PerformingMaintenance)]
    #[test_case(json!(0), instance::State::Unspecified)]
    fn instance_state(input: serde_json::Value, want: instance::State) -> anyhow::Result<()> {
        let got = serde_json::from_value::<instance::State>(input)?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn enum_unknown_values() -> anyhow::Result<()> {
        let got = serde_json::from_value::<instance::State>(json!("HIBERNATING"))?;
        assert!(matches!(got, instance::State::UnknownValue(_)), "{got:?}");
        assert_eq!(got.name(), Some("HIBERNATING"));
        assert_eq!(got.value(), None);
        assert_eq!(got.to_string(), "HIBERNATING");
        assert_eq!(serde_json::to_value(&got)?, json!("HIBERNATING"));

        let got = serde_json::from_value::<instance::node::State>(json!(3))?;
        assert_eq!(got, instance::node::State::Deleting);
        let got = serde_json::from_value::<instance::node::State>(json!(42))?;
        assert_eq!(got.value(), Some(42));
        assert_eq!(got.name(), None);
        assert_eq!(got.to_string(), "42");
        assert_eq!(serde_json::to_value(&got)?, json!(42));
        Ok(())
    }

    #[test]
    fn enum_accessors() {
        let v = MemcacheVersion::Memcache15;
        assert_eq!(v.value(), Some(1));
        assert_eq!(v.name(), Some("MEMCACHE_1_5"));
        assert_eq!(v.to_string(), "MEMCACHE_1_5");
        assert_eq!(MemcacheVersion::default(), MemcacheVersion::Unspecified);
        assert_eq!(MemcacheVersion::from("MEMCACHE_1_5"), v);
        assert_eq!(MemcacheVersion::from(1), v);
    }

    #[test]
    fn operation_metadata_any() -> anyhow::Result<()> {
        let input = json!({
            "@type": "type.googleapis.com/google.cloud.memcache.v1.OperationMetadata",
            "createTime": "2024-03-01T10:00:00Z",
            "target": "projects/p/locations/l/instances/i",
            "verb": "create",
            "apiVersion": "v1",
        });
        let any = serde_json::from_value::<wkt::Any>(input)?;
        let got = any.to_msg::<OperationMetadata>()?;
        assert_eq!(got.verb, "create");
        assert_eq!(got.api_version, "v1");
        assert!(!got.cancel_requested);
        Ok(())
    }

    #[test]
    fn location_metadata() -> anyhow::Result<()> {
        let got = serde_json::from_value::<LocationMetadata>(json!({
            "availableZones": {"us-central1-a": {}, "us-central1-b": {}},
        }))?;
        let mut zones: Vec<_> = got.available_zones.keys().cloned().collect();
        zones.sort();
        assert_eq!(zones, ["us-central1-a", "us-central1-b"]);
        Ok(())
    }

    #[test]
    fn requests() -> anyhow::Result<()> {
        let request = UpdateParametersRequest::new()
            .set_name("projects/p/locations/l/instances/i")
            .set_update_mask(wkt::FieldMask::default().set_paths(["params"]))
            .set_parameters(MemcacheParameters::new().set_params([("max-item-size", "1024")]));
        assert_eq!(
            serde_json::to_value(&request)?,
            json!({
                "name": "projects/p/locations/l/instances/i",
                "updateMask": "params",
                "parameters": {"params": {"max-item-size": "1024"}},
            })
        );

        let request = CreateInstanceRequest::new()
            .set_parent("projects/p/locations/l")
            .set_instance_id("cache")
            .set_instance(Instance::new().set_node_count(2));
        assert_eq!(
            serde_json::to_value(&request)?,
            json!({
                "parent": "projects/p/locations/l",
                "instanceId": "cache",
                "instance": {"nodeCount": 2},
            })
        );

        let request = UpdateInstanceRequest::new()
            .set_update_mask(wkt::FieldMask::default().set_paths(["displayName"]))
            .set_instance(Instance::new().set_display_name("renamed"));
        assert_eq!(
            serde_json::to_value(&request)?,
            json!({
                "updateMask": "displayName",
                "instance": {"displayName": "renamed"},
            })
        );
        Ok(())
    }

    #[test]
    fn list_response() -> anyhow::Result<()> {
        use gax::paginator::PageableResponse;
        let response = serde_json::from_value::<ListInstancesResponse>(json!({
            "instances": [{"name": "a"}, {"name": "b"}],
            "nextPageToken": "t1",
            "unreachable": ["us-east1"],
        }))?;
        assert_eq!(response.next_page_token(), "t1");
        assert_eq!(response.unreachable, ["us-east1"]);
        let names: Vec<_> = response.items().into_iter().map(|i| i.name).collect();
        assert_eq!(names, ["a", "b"]);
        Ok(())
    }
}
