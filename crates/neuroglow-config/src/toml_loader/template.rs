//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub fn default_config_toml() -> String {
    r##"# Neuroglow Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[scene]
# particle_count = 1000          # 2-100000
# connection_count = 50          # 0-10000
# cross_hemisphere_bias = 0.4    # 0.0-1.0
# mesh_radius = 2.0              # 0.1-10.0
# mesh_detail = 3                # 0-6
# displacement = 0.15            # 0.0-1.0
# seed = 42                      # omit for a random layout

[animation]
# target_fps = 30.0              # 1-240
# mesh_rotation_y = 0.002        # radians per processed frame
# mesh_rotation_z = 0.001
# cloud_rotation_y = 0.001

[renderer]
# clear_color = "#050510"
# max_pixel_ratio = 1.5          # 0.25-4.0
# high_performance = true
# mount_element = "brain-bg"

[window]
# title = "Neuroglow"
# width = 1280
# height = 800
# transparent = true

[logging]
# level = "neuroglow=info"
"##
    .to_string()
}
