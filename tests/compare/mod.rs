mod report_change_with_enclosing_section;
mod report_change_with_enclosing_group;
mod report_unaffiliated_change_alone;
mod report_added_and_removed_sections;
mod report_separate_hunks_for_distant_changes;
mod skip_devices_on_ignore_list;
mod banner_and_output_options;
mod reject_bad_invocations;
