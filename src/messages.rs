/// User-facing strings, bundled as a value so display code never consults
/// process-wide locale state. Construct once in `main` and pass by reference.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    // duplicate detection
    pub detect_start: &'static str,
    pub no_files: &'static str,
    pub file_count: &'static str,
    pub calculating: &'static str,
    pub hash_failed: &'static str,
    pub result_title: &'static str,
    pub scanned: &'static str,
    pub duplicate_groups: &'static str,
    pub duplicate_files: &'static str,
    pub no_duplicates: &'static str,
    pub group: &'static str,
    pub files_unit: &'static str,
    pub hash_label: &'static str,
    pub file_size: &'static str,
    pub wasted_space: &'static str,
    pub total_wasted: &'static str,

    // deletion plan and confirmation
    pub size_read_failed: &'static str,
    pub confirm_title: &'static str,
    pub files_to_delete: &'static str,
    pub space_to_save: &'static str,
    pub files_list_title: &'static str,
    pub kept_file: &'static str,
    pub confirm_prompt: &'static str,
    pub executing: &'static str,
    pub cancelled: &'static str,
    pub invalid_response: &'static str,

    // deletion execution
    pub removal_start: &'static str,
    pub dry_run_mode: &'static str,
    pub dry_run_tag: &'static str,
    pub keep_label: &'static str,
    pub delete_label: &'static str,
    pub delete_failed: &'static str,
    pub summary_title: &'static str,
    pub removed_count: &'static str,
    pub would_removed_count: &'static str,
    pub space_saved: &'static str,
    pub would_space_saved: &'static str,
    pub failed_count: &'static str,

    // rule organizer
    pub no_config: &'static str,
    pub organize_start: &'static str,
    pub recursive_mode: &'static str,
    pub no_files_to_organize: &'static str,
    pub moved: &'static str,
    pub conflict: &'static str,
    pub name_exists: &'static str,
    pub skip_tag: &'static str,
    pub already_in_place: &'static str,
    pub cleaned: &'static str,
    pub removed_empty_dir: &'static str,
    pub organize_completed: &'static str,

    // date organizer
    pub date_start: &'static str,
    pub pattern_label: &'static str,
    pub no_mtime: &'static str,

    // setup
    pub setup_title: &'static str,
    pub ext_rules_title: &'static str,
    pub kw_rules_title: &'static str,
    pub current_config: &'static str,
    pub input_prompt: &'static str,
    pub none: &'static str,
    pub config_saved: &'static str,
}

impl Messages {
    /// Pick a catalog from the `LANG` environment variable.
    pub fn from_env() -> Self {
        match std::env::var("LANG") {
            Ok(lang) if lang.starts_with("ja") => Self::japanese(),
            _ => Self::english(),
        }
    }

    pub fn english() -> Self {
        Self {
            detect_start: "Starting duplicate detection",
            no_files: "No files to scan.",
            file_count: "File count",
            calculating: "Calculating hashes...",
            hash_failed: "could not hash file",
            result_title: "=== Duplicate Detection Results ===",
            scanned: "Scanned files",
            duplicate_groups: "Duplicate groups",
            duplicate_files: "Duplicate files",
            no_duplicates: "No duplicates found.",
            group: "Group",
            files_unit: "files",
            hash_label: "hash",
            file_size: "File size",
            wasted_space: "Wasted space",
            total_wasted: "Total wasted space",

            size_read_failed: "could not read file size, skipped from plan",
            confirm_title: "Duplicate File Deletion Confirmation",
            files_to_delete: "Files to delete",
            space_to_save: "Disk space to reclaim",
            files_list_title: "Files to delete:",
            kept_file: "Kept file",
            confirm_prompt: "Delete these files? [yes/no]: ",
            executing: "Executing deletion...",
            cancelled: "Deletion cancelled.",
            invalid_response: "Invalid response, deletion cancelled.",

            removal_start: "Starting duplicate removal",
            dry_run_mode: "[dry-run mode]",
            dry_run_tag: "[dry-run]",
            keep_label: "Keep",
            delete_label: "Delete",
            delete_failed: "failed to delete",
            summary_title: "Summary",
            removed_count: "Files removed",
            would_removed_count: "Files that would be removed",
            space_saved: "Disk space reclaimed",
            would_space_saved: "Disk space that would be reclaimed",
            failed_count: "Failed deletions",

            no_config: "Configuration not found. Run 'tidy setup' first.",
            organize_start: "Starting organization",
            recursive_mode: "[recursive]",
            no_files_to_organize: "No files to organize.",
            moved: "Moved",
            conflict: "Conflict",
            name_exists: "a file with the same name already exists",
            skip_tag: "[skip]",
            already_in_place: "already in the right place",
            cleaned: "Cleaned up",
            removed_empty_dir: "removed empty directory",
            organize_completed: "Organization completed.",

            date_start: "Starting date-based organization",
            pattern_label: "Pattern",
            no_mtime: "could not read modification time, skipped",

            setup_title: "Organization setup",
            ext_rules_title: "[1] Extension rules (e.g. jpg,png:images pdf:docs)",
            kw_rules_title: "[2] Keyword rules (e.g. invoice:billing report:work)",
            current_config: "Current",
            input_prompt: "New rules (Enter to keep current): ",
            none: "none",
            config_saved: "Configuration saved",
        }
    }

    pub fn japanese() -> Self {
        Self {
            detect_start: "重複ファイルの検出を開始します",
            no_files: "検索対象のファイルが見つかりませんでした。",
            file_count: "ファイル数",
            calculating: "ハッシュ値を計算中...",
            hash_failed: "ハッシュ値を計算できませんでした",
            result_title: "=== 重複ファイルの検出結果 ===",
            scanned: "スキャンしたファイル数",
            duplicate_groups: "重複グループ数",
            duplicate_files: "重複ファイル数",
            no_duplicates: "重複ファイルは見つかりませんでした。",
            group: "グループ",
            files_unit: "件",
            hash_label: "ハッシュ",
            file_size: "ファイルサイズ",
            wasted_space: "無駄な容量",
            total_wasted: "合計無駄容量",

            size_read_failed: "ファイルサイズを取得できないため対象から除外します",
            confirm_title: "重複ファイル削除の確認",
            files_to_delete: "削除対象のファイル数",
            space_to_save: "節約されるディスク容量",
            files_list_title: "削除対象のファイル:",
            kept_file: "保持されるファイル",
            confirm_prompt: "これらのファイルを削除してもよろしいですか? [yes/no]: ",
            executing: "削除を実行します...",
            cancelled: "削除をキャンセルしました。",
            invalid_response: "無効な入力です。削除をキャンセルしました。",

            removal_start: "重複ファイルの削除を開始します",
            dry_run_mode: "[Dry-run モード]",
            dry_run_tag: "[dry-run]",
            keep_label: "保持",
            delete_label: "削除",
            delete_failed: "削除できませんでした",
            summary_title: "サマリー",
            removed_count: "削除されたファイル数",
            would_removed_count: "削除対象のファイル数",
            space_saved: "節約されたディスク容量",
            would_space_saved: "節約されるディスク容量",
            failed_count: "削除に失敗したファイル数",

            no_config: "設定が見つかりません。先に 'tidy setup' を実行してください。",
            organize_start: "整理を開始します",
            recursive_mode: "[再帰モード]",
            no_files_to_organize: "整理対象のファイルが見つかりませんでした。",
            moved: "移動",
            conflict: "競合",
            name_exists: "ファイル名が重複しています",
            skip_tag: "[skip]",
            already_in_place: "既に正しい場所にあります",
            cleaned: "クリーンアップ",
            removed_empty_dir: "空ディレクトリを削除",
            organize_completed: "整理が完了しました。",

            date_start: "日付ベースの整理を開始します",
            pattern_label: "整理パターン",
            no_mtime: "更新日時を取得できないためスキップします",

            setup_title: "整理設定",
            ext_rules_title: "[1] 拡張子ベースの整理設定 (例: jpg,png:images pdf:docs)",
            kw_rules_title: "[2] キーワードベースの整理設定 (例: invoice:billing report:work)",
            current_config: "現在の設定",
            input_prompt: "新しい設定を入力 (スキップはEnter): ",
            none: "なし",
            config_saved: "設定を保存しました",
        }
    }
}
