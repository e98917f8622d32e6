//! Built-in override table.
//!
//! Each row is `(name, license, license_files)`. A `None` field means the
//! dependency manager's own answer is kept for that field.

use super::OverrideRow;

/// Rows grouped by dependency manager name.
pub const DEFAULT_OVERRIDES: &[(&str, &[OverrideRow])] = &[
    ("ruby_bundler", RUBY_BUNDLER),
    ("chef_berkshelf", CHEF_BERKSHELF),
    ("perl_cpan", PERL_CPAN),
    ("erlang_rebar", ERLANG_REBAR),
];

/// Gems whose gemspec carries no usable license metadata.
const RUBY_BUNDLER: &[OverrideRow] = &[
    ("debug_inspector", Some("MIT"), Some(&["README.md"])),
    ("inifile", Some("MIT"), Some(&["README.md"])),
    ("syslog-logger", Some("MIT"), Some(&["README.rdoc"])),
    ("httpclient", Some("Ruby"), Some(&["README.md"])),
    ("little-plugger", Some("MIT"), Some(&["README.rdoc"])),
    ("logging", Some("MIT"), Some(&["README.md"])),
    ("coderay", None, Some(&["README_INDEX.rdoc"])),
    ("multipart-post", Some("MIT"), Some(&["README.md"])),
    ("erubis", Some("MIT"), None),
    ("binding_of_caller", Some("MIT"), None),
    ("method_source", Some("MIT"), None),
    ("pry-remote", Some("MIT"), None),
    ("pry-stack_explorer", Some("MIT"), None),
    ("plist", Some("MIT"), None),
    ("proxifier", Some("MIT"), None),
    ("mixlib-shellout", Some("Apache-2.0"), None),
    ("mixlib-log", Some("Apache-2.0"), None),
    ("uuidtools", Some("Apache-2.0"), None),
    ("cheffish", Some("Apache-2.0"), None),
    ("chef-provisioning", Some("Apache-2.0"), None),
    ("chef-provisioning-aws", Some("Apache-2.0"), None),
    ("chef-rewind", Some("MIT"), None),
    ("ubuntu_ami", Some("Apache-2.0"), None),
    ("net-telnet", Some("Ruby"), None),
    ("netrc", Some("MIT"), None),
    ("oc-chef-pedant", Some("Apache-2.0"), None),
    ("rake", Some("MIT"), None),
    ("rspec", Some("MIT"), None),
    ("yajl-ruby", Some("MIT"), None),
    ("bunny", Some("MIT"), None),
    ("em-http-request", Some("MIT"), None),
    ("sequel", Some("MIT"), None),
    ("reel", Some("MIT"), None),
    ("spork", Some("MIT"), None),
    ("rack-test", Some("MIT"), None),
    ("moneta", Some("MIT"), None),
    ("mixlib-authentication", Some("Apache-2.0"), None),
    ("mixlib-cli", Some("Apache-2.0"), None),
    ("ohai", Some("Apache-2.0"), None),
    ("chef", Some("Apache-2.0"), None),
    ("ipaddress", Some("MIT"), None),
    ("systemu", Some("BSD-2-Clause"), None),
    ("pry", Some("MIT"), None),
    ("puma", Some("BSD-3-Clause"), None),
    ("rb-inotify", Some("MIT"), None),
    ("chef-web-core", Some("Apache-2.0"), None),
    ("knife-opc", Some("Apache-2.0"), None),
    ("highline", Some("Ruby"), Some(&["LICENSE"])),
    // Upstream packages ship no license file; fetched from the project sites.
    (
        "sfl",
        Some("Ruby"),
        Some(&["https://raw.githubusercontent.com/ujihisa/spawn-for-legacy/master/LICENCE.md"]),
    ),
    ("json_pure", None, Some(&["https://raw.githubusercontent.com/flori/json/master/README.md"])),
    (
        "aws-sdk-core",
        None,
        Some(&["https://raw.githubusercontent.com/aws/aws-sdk-ruby/master/README.md"]),
    ),
    (
        "aws-sdk-resources",
        None,
        Some(&["https://raw.githubusercontent.com/aws/aws-sdk-ruby/master/README.md"]),
    ),
    (
        "aws-sdk",
        None,
        Some(&["https://raw.githubusercontent.com/aws/aws-sdk-ruby/master/README.md"]),
    ),
    (
        "fuzzyurl",
        None,
        Some(&["https://raw.githubusercontent.com/gamache/fuzzyurl/master/LICENSE.txt"]),
    ),
    ("jwt", None, Some(&["https://github.com/jwt/ruby-jwt/blob/master/LICENSE"])),
    (
        "win32-process",
        None,
        Some(&["http://www.perlfoundation.org/attachment/legal/artistic-2_0.txt"]),
    ),
    ("win32-api", None, Some(&["http://www.perlfoundation.org/attachment/legal/artistic-2_0.txt"])),
    ("win32-dir", None, Some(&["http://www.perlfoundation.org/attachment/legal/artistic-2_0.txt"])),
    ("win32-ipc", None, Some(&["http://www.perlfoundation.org/attachment/legal/artistic-2_0.txt"])),
    (
        "win32-event",
        None,
        Some(&["http://www.perlfoundation.org/attachment/legal/artistic-2_0.txt"]),
    ),
    (
        "win32-eventlog",
        None,
        Some(&["http://www.perlfoundation.org/attachment/legal/artistic-2_0.txt"]),
    ),
    (
        "win32-mmap",
        None,
        Some(&["http://www.perlfoundation.org/attachment/legal/artistic-2_0.txt"]),
    ),
    (
        "win32-mutex",
        None,
        Some(&["http://www.perlfoundation.org/attachment/legal/artistic-2_0.txt"]),
    ),
    (
        "win32-service",
        None,
        Some(&["http://www.perlfoundation.org/attachment/legal/artistic-2_0.txt"]),
    ),
    (
        "windows-api",
        None,
        Some(&["http://www.perlfoundation.org/attachment/legal/artistic-2_0.txt"]),
    ),
    (
        "rdoc",
        Some("Ruby"),
        Some(&["https://raw.githubusercontent.com/rdoc/rdoc/master/LICENSE.rdoc"]),
    ),
    (
        "rest-client",
        Some("MIT"),
        Some(&["https://raw.githubusercontent.com/rest-client/rest-client/master/LICENSE"]),
    ),
    (
        "rspec-rerun",
        None,
        Some(&["https://raw.githubusercontent.com/dblock/rspec-rerun/master/LICENSE.md"]),
    ),
    (
        "amqp",
        Some("Ruby"),
        Some(&["https://raw.githubusercontent.com/ruby-amqp/amqp/master/README.md"]),
    ),
    (
        "fast_xs",
        Some("MIT"),
        Some(&["https://raw.githubusercontent.com/brianmario/fast_xs/master/LICENSE"]),
    ),
    (
        "word-salad",
        Some("MIT"),
        Some(&["https://raw.githubusercontent.com/alexvollmer/word_salad/master/README.txt"]),
    ),
    (
        "minitest",
        None,
        Some(&["https://raw.githubusercontent.com/seattlerb/minitest/master/README.rdoc"]),
    ),
    (
        "cucumber-wire",
        None,
        Some(&["https://raw.githubusercontent.com/cucumber/cucumber-ruby-wire/master/LICENSE"]),
    ),
    (
        "minitar",
        Some("Ruby"),
        Some(&["https://raw.githubusercontent.com/atoulme/minitar/master/README"]),
    ),
    (
        "enumerable-lazy",
        Some("MIT"),
        Some(&["https://raw.githubusercontent.com/yhara/enumerable-lazy/master/README.md"]),
    ),
    (
        "rack-accept",
        Some("MIT"),
        Some(&["https://raw.githubusercontent.com/mjackson/rack-accept/master/README.md"]),
    ),
    (
        "net-http-spy",
        Some("Public-Domain"),
        Some(&["https://raw.githubusercontent.com/martinbtt/net-http-spy/master/readme.markdown"]),
    ),
    (
        "http_parser.rb",
        None,
        Some(&["https://raw.githubusercontent.com/tmm1/http_parser.rb/master/LICENSE-MIT"]),
    ),
    (
        "websocket-extensions",
        None,
        Some(&["https://raw.githubusercontent.com/faye/websocket-extensions-ruby/master/LICENSE.md"]),
    ),
    (
        "websocket-driver",
        None,
        Some(&["https://raw.githubusercontent.com/faye/websocket-driver-ruby/master/LICENSE.md"]),
    ),
    (
        "dep_selector",
        None,
        Some(&["https://raw.githubusercontent.com/chef/dep-selector/master/LICENSE"]),
    ),
    (
        "overcommit",
        None,
        Some(&["https://raw.githubusercontent.com/brigade/overcommit/master/MIT-LICENSE"]),
    ),
    (
        "github_changelog_generator",
        None,
        Some(&["https://raw.githubusercontent.com/skywinder/github-changelog-generator/master/LICENSE"]),
    ),
    (
        "pbkdf2",
        Some("MIT"),
        Some(&["https://raw.githubusercontent.com/emerose/pbkdf2-ruby/master/LICENSE.TXT"]),
    ),
    (
        "rails-deprecated_sanitizer",
        None,
        Some(&["https://raw.githubusercontent.com/rails/rails-deprecated_sanitizer/master/LICENSE"]),
    ),
    (
        "rails-html-sanitizer",
        None,
        Some(&["https://raw.githubusercontent.com/rails/rails-html-sanitizer/master/MIT-LICENSE"]),
    ),
    (
        "compass",
        Some("MIT"),
        Some(&["https://raw.githubusercontent.com/Compass/compass/stable/LICENSE.markdown"]),
    ),
    (
        "railties",
        None,
        Some(&["https://raw.githubusercontent.com/rails/rails/master/railties/MIT-LICENSE"]),
    ),
    (
        "coffee-script-source",
        None,
        Some(&["https://raw.githubusercontent.com/jessedoyle/coffee-script-source/master/LICENSE"]),
    ),
    (
        "omniauth-chef",
        None,
        Some(&["https://raw.githubusercontent.com/chef/omniauth-chef/master/README.md"]),
    ),
    ("rails", None, Some(&["https://raw.githubusercontent.com/rails/rails/master/README.md"])),
    (
        "unicorn-rails",
        Some("MIT"),
        Some(&["https://raw.githubusercontent.com/samuelkadolph/unicorn-rails/master/LICENSE"]),
    ),
    (
        "hoe",
        Some("MIT"),
        Some(&["https://raw.githubusercontent.com/seattlerb/hoe/master/README.rdoc"]),
    ),
];

/// Cookbooks resolved through Berkshelf.
const CHEF_BERKSHELF: &[OverrideRow] = &[
    ("apt", None, Some(&["https://raw.githubusercontent.com/chef-cookbooks/apt/master/LICENSE"])),
    (
        "chef-ha-drbd",
        None,
        Some(&["https://raw.githubusercontent.com/chef/chef-server/master/LICENSE"]),
    ),
    (
        "private-chef",
        None,
        Some(&["https://raw.githubusercontent.com/chef/chef-server/master/LICENSE"]),
    ),
    (
        "chef-sugar",
        None,
        Some(&["https://raw.githubusercontent.com/sethvargo/chef-sugar/master/LICENSE"]),
    ),
    (
        "openssl",
        None,
        Some(&["https://raw.githubusercontent.com/chef-cookbooks/openssl/master/LICENSE"]),
    ),
    (
        "runit",
        None,
        Some(&["https://raw.githubusercontent.com/chef-cookbooks/runit/master/LICENSE"]),
    ),
    ("yum", None, Some(&["https://raw.githubusercontent.com/chef-cookbooks/yum/master/LICENSE"])),
];

/// Most of these point at the README inside the unpacked module, which is
/// where the licensing terms are stated.
const PERL_CPAN: &[OverrideRow] = &[
    ("Scalar-List-Utils", None, Some(&["README"])),
    ("perl", None, Some(&["README"])),
    ("IO", None, Some(&["README"])),
    (
        "ExtUtils-MakeMaker",
        None,
        Some(&["http://www.perlfoundation.org/attachment/legal/artistic-2_0.txt"]),
    ),
    ("PathTools", Some("Perl-5"), Some(&["lib/File/Spec.pm"])),
    ("Exporter", None, Some(&["README"])),
    ("Carp", None, Some(&["README"])),
    ("lib", None, Some(&["Artistic"])),
    (
        "Pod-Escapes",
        None,
        Some(&["http://www.perlfoundation.org/attachment/legal/artistic-2_0.txt"]),
    ),
    ("Pod-Usage", None, Some(&["README"])),
    (
        "base",
        Some("Perl-5"),
        Some(&["http://www.perlfoundation.org/attachment/legal/artistic-2_0.txt"]),
    ),
    ("Encode", None, Some(&["AUTHORS"])),
    ("Moo", None, Some(&["README"])),
    ("Role-Tiny", None, Some(&["README"])),
    ("Try-Tiny", None, Some(&["LICENCE"])),
    ("Module-Metadata", None, Some(&["LICENCE"])),
    ("constant", None, Some(&["README"])),
    ("Module-Runtime", None, Some(&["README"])),
    ("ExtUtils-Install", None, Some(&["README"])),
    ("File-Path", None, Some(&["README"])),
    ("Getopt-Long", Some("Perl-5"), Some(&["README"])),
    ("ExtUtils-ParseXS", Some("Perl-5"), Some(&["README"])),
    ("version", None, Some(&["README"])),
    ("Data-Dumper", Some("Perl-5"), Some(&["Dumper.pm"])),
    ("Test-Harness", None, Some(&["README"])),
    ("Text-ParseWords", None, Some(&["README"])),
    ("Devel-GlobalDestruction", None, Some(&["README"])),
    ("XSLoader", None, Some(&["README"])),
    ("IPC-Cmd", None, Some(&["README"])),
    ("Pod-Parser", Some("Perl-5"), Some(&["README"])),
    ("Config-GitLike", None, Some(&["lib/Config/GitLike.pm"])),
    ("Test-Exception", None, Some(&["lib/Test/Exception.pm"])),
    ("MooX-Types-MooseLike", None, Some(&["README"])),
    ("String-ShellQuote", Some("Perl-5"), Some(&["README"])),
    ("Time-HiRes", None, Some(&["README"])),
    ("Test", Some("Perl-5"), Some(&["README"])),
    ("parent", None, Some(&["lib/parent.pm"])),
    ("MIME-Base64", None, Some(&["README"])),
    ("Sub-Identify", None, Some(&["lib/Sub/Identify.pm"])),
    ("namespace-autoclean", None, Some(&["README"])),
    ("B-Hooks-EndOfScope", None, Some(&["README"])),
    ("namespace-clean", None, Some(&["lib/namespace/clean.pm"])),
    ("Test-Deep", None, Some(&["lib/Test/Deep.pm"])),
    ("IO-Pager", Some("Perl-5"), Some(&["README"])),
    ("libintl-perl", Some("GPL-3.0"), Some(&["COPYING"])),
    ("Storable", Some("Perl-5"), Some(&["README"])),
    ("Test-Warnings", Some("Artistic-1.0"), Some(&["LICENCE"])),
    ("Test-Dir", None, Some(&["README"])),
    ("Digest-SHA", None, Some(&["README"])),
    ("Test-File-Contents", None, Some(&["README"])),
    ("Digest-MD5", None, Some(&["README"])),
    ("Algorithm-Diff", Some("Perl-5"), Some(&["lib/Algorithm/Diff.pm"])),
    ("Encode-Locale", None, Some(&["README"])),
    ("Hash-Merge", None, Some(&["README"])),
    ("Clone", None, Some(&["README"])),
    ("URI-db", None, Some(&["README"])),
    ("URI-Nested", None, Some(&["README.md"])),
    ("Test-utf8", None, Some(&["README"])),
];

/// Erlang applications pulled in by rebar. Pinned commits where upstream moved files.
const ERLANG_REBAR: &[OverrideRow] = &[
    (
        "sync",
        Some("MIT"),
        Some(&["https://raw.githubusercontent.com/rustyio/sync/11df81d196eaab2d84caa3fbe8def5d476ef79d8/src/sync.erl"]),
    ),
    (
        "rebar_vsn_plugin",
        Some("Apache-2.0"),
        Some(&["https://raw.githubusercontent.com/erlware/rebar_vsn_plugin/master/src/rebar_vsn_plugin.erl"]),
    ),
    (
        "edown",
        Some("Erlang-Public"),
        Some(&["https://raw.githubusercontent.com/seth/edown/master/NOTICE"]),
    ),
    (
        "bcrypt",
        Some("Multiple"),
        Some(&["https://github.com/chef/erlang-bcrypt/blob/master/LICENSE"]),
    ),
    (
        "amqp_client",
        Some("MPL-2.0"),
        Some(&["https://raw.githubusercontent.com/seth/amqp_client/7622ad8093a41b7288a1aa44dd16d3e92ce8f833/src/amqp_connection.erl"]),
    ),
    (
        "erlsom",
        Some("LGPL-3.0"),
        Some(&[
            "https://raw.githubusercontent.com/willemdj/erlsom/c5ca9fca1257f563d78b048e35ac60832ec80584/COPYING",
            "https://raw.githubusercontent.com/willemdj/erlsom/c5ca9fca1257f563d78b048e35ac60832ec80584/COPYING.LESSER",
        ]),
    ),
    (
        "gen_server2",
        Some("Public-Domain"),
        Some(&["https://raw.githubusercontent.com/mdaguete/gen_server2/master/README.md"]),
    ),
    (
        "opscoderl_folsom",
        Some("Apache-2.0"),
        Some(&["https://raw.githubusercontent.com/chef/opscoderl_folsom/master/README.md"]),
    ),
    (
        "quickrand",
        Some("BSD-2-Clause"),
        Some(&["https://raw.githubusercontent.com/okeuday/quickrand/master/README.markdown"]),
    ),
    (
        "rabbit_common",
        Some("MPL-2.0"),
        Some(&["https://raw.githubusercontent.com/muxspace/rabbit_common/master/include/rabbit_msg_store.hrl"]),
    ),
    (
        "uuid",
        Some("BSD-2-Clause"),
        Some(&["https://raw.githubusercontent.com/okeuday/uuid/master/README.markdown"]),
    ),
];
