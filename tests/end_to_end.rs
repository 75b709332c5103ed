use spellid_check::{CheckCoordinator, Config, FailureKind};
use std::fs;
use std::path::Path;

const BOSS_MOD: &str = r#"local mod	= DBM:NewMod("Boss", "DBM-Raid")
local L		= mod:GetLocalizedStrings()

mod:RegisterCombat("combat")

mod:RegisterEventsInCombat(
	"SPELL_CAST_START 1001 1002",
	"SPELL_AURA_APPLIED 2001",
	"CHAT_MSG_MONSTER_YELL",
	"UNIT_SPELLCAST_SUCCEEDED boss1"
)

mod.SPELL_AURA_APPLIED_DOSE = mod.SPELL_AURA_APPLIED

function mod:OnCombatStart(delay)
	if spellId == 5 then end
end

function mod:SPELL_CAST_START(args)
	local spellId = args.spellId
	if spellId == 1001 then
	elseif args:IsSpellID(1002, 1003) then
	end
end

function mod:SPELL_AURA_APPLIED_DOSE(args)
	if args.spellId == 2001 then end
end

--[[
function mod:SPELL_CAST_SUCCESS(args)
	if args.spellId == 3001 then end
end
--]]

function mod:CHAT_MSG_MONSTER_YELL(msg)
	if spellId == 77 then end
end

function mod:UNIT_SPELLCAST_SUCCEEDED(uId, _, spellId)
	if spellId == 4242 then end
end

function mod:SPELL_DAMAGE(_, _, _, _, _, _, _, _, spellId)
	-- if spellId == 1 then end
	if spellId == 6001 then end
end
"#;

const CLEAN_MOD: &str = r#"local mod	= DBM:NewMod("Trash", "DBM-Raid")

mod:RegisterEvents(
	"SPELL_CAST_SUCCESS 1234 5678"
)

function mod:SPELL_CAST_SUCCESS(args)
	if args.spellId == 1234 then
	end
end
"#;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_run_over_discovered_tree() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "DBM-Raid/Boss.lua", BOSS_MOD);
    write(dir.path(), "DBM-Raid/Trash/Trash.lua", CLEAN_MOD);
    write(dir.path(), "DBM-Raid/Boss.xml", "if spellId == 1 then");

    let config = Config::new().with_root(dir.path().to_path_buf()).with_threads(2);
    let report = CheckCoordinator::new(&config).run(&config).unwrap();

    assert!(report.failed());
    assert_eq!(report.summary.files_checked, 2);
    assert_eq!(report.summary.files_failed, 1);

    let boss = report
        .files
        .iter()
        .find(|f| f.path().ends_with("Boss.lua"))
        .unwrap();
    assert_eq!(
        boss.messages(),
        vec![
            "SpellID not registered: SPELL_CAST_START\t1003".to_string(),
            "Event isn't registered: SPELL_DAMAGE\t6001".to_string(),
        ]
    );
    assert_eq!(boss.failures()[0].kind, FailureKind::SpellIdNotRegistered);
    assert_eq!(boss.failures()[1].line, 46);
}

#[test]
fn test_clean_tree_passes() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a/Trash.lua", CLEAN_MOD);
    write(dir.path(), "b/Trash.lua", CLEAN_MOD);

    let config = Config::new().with_root(dir.path().to_path_buf());
    let report = CheckCoordinator::new(&config).run(&config).unwrap();

    assert!(!report.failed());
    assert_eq!(report.summary.failure_count, 0);
}

#[test]
fn test_skip_function_from_config() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "Boss.lua", BOSS_MOD);

    let config = Config::new()
        .with_root(dir.path().to_path_buf())
        .with_skip_function("SPELL_DAMAGE")
        .with_skip_function("SPELL_CAST_START");
    let report = CheckCoordinator::new(&config).run(&config).unwrap();

    assert!(!report.failed());
}
